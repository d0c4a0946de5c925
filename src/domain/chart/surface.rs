use super::curve::CurveGeometry;
use super::value_objects::{AxisLabel, CurveStyle, Layer};
use serde::Serialize;

/// Everything needed to draw one plot of a chart card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub geometry: CurveGeometry,
    pub style: CurveStyle,
    /// Unique per chart and layer so several cards can share one document.
    pub gradient_id: String,
}

impl ChartScene {
    pub fn gradient_id_for(chart_index: usize, layer: Layer) -> String {
        format!("chart-gradient-{}-{}", chart_index, layer)
    }
}

/// Port to whatever displays a chart card.
///
/// Implementations only display what they are given; they never call back into the
/// controller.
pub trait DrawingSurface {
    /// Replace the plot of `layer`. `None` clears it.
    fn draw(&mut self, layer: Layer, scene: Option<&ChartScene>);

    /// Replace the detail x-axis labels.
    fn draw_axis(&mut self, labels: &[AxisLabel]);

    /// Move the selection window over the overview, in percent of the track.
    fn place_window(&mut self, left_pct: f64, width_pct: f64);
}
