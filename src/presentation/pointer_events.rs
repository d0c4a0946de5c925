use leptos::ev::{self, EventDescriptor};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, PointerEvent};

#[derive(Clone, Copy, Debug)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// A window listener that stays registered until [`WindowListener::remove`] is called.
pub struct WindowListener {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl WindowListener {
    pub fn remove(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

pub fn listen_on_window<E>(
    event: E,
    options: ListenerOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowListener
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowListener { event_name, callback, capture: options.capture }
}

/// Document-wide pointer tracking: moves anywhere continue a drag, and an up or
/// cancel anywhere ends it.
pub struct PointerListeners {
    listeners: Vec<WindowListener>,
}

impl PointerListeners {
    pub fn attach(
        on_move: impl FnMut(f64) + 'static,
        on_release: impl Fn() + Clone + 'static,
    ) -> Self {
        let mut on_move = on_move;
        let release_up = on_release.clone();
        let listeners = vec![
            listen_on_window(ev::pointermove, ListenerOptions::default(), move |e: PointerEvent| {
                on_move(e.client_x() as f64)
            }),
            listen_on_window(ev::pointerup, ListenerOptions::default(), move |_: PointerEvent| {
                release_up()
            }),
            listen_on_window(ev::pointercancel, ListenerOptions::default(), move |_: PointerEvent| {
                on_release()
            }),
        ];
        Self { listeners }
    }

    pub fn detach(self) {
        for listener in self.listeners {
            listener.remove();
        }
    }
}
