use crate::domain::chart::{ContainerSizes, PlotSize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver};

/// Keeps a `ResizeObserver` and its callback alive for as long as a card is mounted.
pub struct ContainerObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl ContainerObserver {
    pub fn observe(
        elements: &[&Element],
        on_resize: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let mut on_resize = on_resize;
        let callback = Closure::wrap(Box::new(
            move |_entries: js_sys::Array, _observer: ResizeObserver| on_resize(),
        ) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        for element in elements {
            observer.observe(element);
        }
        Ok(Self { observer, _callback: callback })
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Current layout sizes of a card. The overview plot fills the whole track.
pub fn measure(track: &Element, detail: &Element) -> ContainerSizes {
    let track_width = track.client_width() as f64;
    ContainerSizes {
        track_width,
        detail: PlotSize::new(detail.client_width() as f64, detail.client_height() as f64),
        overview: PlotSize::new(track_width, track.client_height() as f64),
    }
}
