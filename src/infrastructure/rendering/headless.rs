use super::svg_markup::render_svg;
use crate::domain::chart::{AxisLabel, ChartScene, DrawingSurface, Layer};

/// Surface that keeps the last frame in memory instead of displaying it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub detail: Option<ChartScene>,
    pub overview: Option<ChartScene>,
    pub axis: Vec<AxisLabel>,
    /// `(left_pct, width_pct)` of the selection window.
    pub window: (f64, f64),
    pub draw_count: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self, layer: Layer) -> Option<&ChartScene> {
        match layer {
            Layer::Detail => self.detail.as_ref(),
            Layer::Overview => self.overview.as_ref(),
        }
    }

    pub fn export_svg(&self, layer: Layer) -> Option<String> {
        self.scene(layer).map(render_svg)
    }
}

impl DrawingSurface for HeadlessSurface {
    fn draw(&mut self, layer: Layer, scene: Option<&ChartScene>) {
        let slot = match layer {
            Layer::Detail => &mut self.detail,
            Layer::Overview => &mut self.overview,
        };
        *slot = scene.cloned();
        self.draw_count += 1;
    }

    fn draw_axis(&mut self, labels: &[AxisLabel]) {
        self.axis = labels.to_vec();
    }

    fn place_window(&mut self, left_pct: f64, width_pct: f64) {
        self.window = (left_pct, width_pct);
    }
}
