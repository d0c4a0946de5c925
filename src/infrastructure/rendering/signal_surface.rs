use super::svg_markup::render_svg;
use crate::domain::chart::{AxisLabel, ChartScene, DrawingSurface, Layer};
use leptos::*;

/// Surface backed by Leptos signals; components read them to render the card.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub detail: RwSignal<Option<ChartScene>>,
    pub overview: RwSignal<Option<ChartScene>>,
    pub axis: RwSignal<Vec<AxisLabel>>,
    pub window: RwSignal<(f64, f64)>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            detail: create_rw_signal(None),
            overview: create_rw_signal(None),
            axis: create_rw_signal(Vec::new()),
            window: create_rw_signal((0.0, 100.0)),
        }
    }

    fn slot(&self, layer: Layer) -> RwSignal<Option<ChartScene>> {
        match layer {
            Layer::Detail => self.detail,
            Layer::Overview => self.overview,
        }
    }

    /// Current drawing of `layer` as a standalone SVG document.
    pub fn export_svg(&self, layer: Layer) -> Option<String> {
        self.slot(layer).with_untracked(|scene| scene.as_ref().map(render_svg))
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for SignalSurface {
    fn draw(&mut self, layer: Layer, scene: Option<&ChartScene>) {
        self.slot(layer).set(scene.cloned());
    }

    fn draw_axis(&mut self, labels: &[AxisLabel]) {
        self.axis.set(labels.to_vec());
    }

    fn place_window(&mut self, left_pct: f64, width_pct: f64) {
        self.window.set((left_pct, width_pct));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn window_signal_follows_placement() {
        let mut surface = SignalSurface::new();
        surface.place_window(30.0, 20.0);
        assert_eq!(surface.window.get_untracked(), (30.0, 20.0));
    }

    #[wasm_bindgen_test]
    fn cleared_layer_exports_nothing() {
        let mut surface = SignalSurface::new();
        surface.draw(Layer::Detail, None);
        assert!(surface.export_svg(Layer::Detail).is_none());
    }
}
