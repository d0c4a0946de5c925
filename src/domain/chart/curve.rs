use super::value_objects::{Layer, PlotSize, TimeWindow};
use crate::domain::logging::LogComponent;
use crate::domain::series::{FullSeries, Sample, Timestamp};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::Write;

pub const DEFAULT_SMOOTHING: f64 = 0.2;
/// Share of the detail plot height used by the value range; the rest is headroom.
pub const DEFAULT_DETAIL_VALUE_SCALE: f64 = 0.8;

/// A sample prepared for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub time: Timestamp,
    pub value: f64,
    /// Sits exactly under an axis label and gets a marker in the detail view.
    pub is_label_anchor: bool,
}

impl From<&Sample> for PlotPoint {
    fn from(sample: &Sample) -> Self {
        Self { time: sample.time, value: sample.value, is_label_anchor: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub time: Timestamp,
    pub value: f64,
}

/// Path data for one plot. Both paths go through every input point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveGeometry {
    pub fill_d: String,
    pub stroke_d: String,
    pub markers: Vec<Marker>,
    pub size: PlotSize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pixel {
    x: f64,
    y: f64,
}

/// Merge label instants into a sample slice.
///
/// Labels that coincide with a sample flag that sample; the others are inserted with
/// a value interpolated on `series`, so every marker lands on the drawn curve.
pub fn with_label_anchors(
    series: &FullSeries,
    subset: &[Sample],
    labels: &[Timestamp],
) -> Vec<PlotPoint> {
    let mut points: Vec<PlotPoint> = subset.iter().map(PlotPoint::from).collect();
    for &time in labels {
        match points.binary_search_by(|p| p.time.cmp(&time)) {
            Ok(i) => points[i].is_label_anchor = true,
            Err(i) => points.insert(
                i,
                PlotPoint { time, value: series.value_at(time), is_label_anchor: true },
            ),
        }
    }
    points
}

/// Domain service - smoothed area curve construction
#[derive(Debug, Clone, Copy)]
pub struct CurveBuilder {
    smoothing: f64,
    detail_value_scale: f64,
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING, DEFAULT_DETAIL_VALUE_SCALE)
    }
}

impl CurveBuilder {
    pub fn new(smoothing: f64, detail_value_scale: f64) -> Self {
        Self { smoothing, detail_value_scale }
    }

    /// Build fill and stroke paths plus label markers.
    ///
    /// Detail plots map time onto x, using `time_range` when given and the point span
    /// otherwise; overview plots space points evenly. Returns `None` when there is
    /// nothing to draw: fewer than two points, an empty plot area, or a zero time span.
    pub fn build(
        &self,
        points: &[PlotPoint],
        size: PlotSize,
        layer: Layer,
        time_range: Option<TimeWindow>,
    ) -> Option<CurveGeometry> {
        if points.len() < 2 || !size.is_drawable() {
            crate::log_debug!(
                LogComponent::Domain("CurveBuilder"),
                "skip {} curve: {} points, {}x{}",
                layer,
                points.len(),
                size.width,
                size.height
            );
            return None;
        }

        let pixels = match layer {
            Layer::Overview => self.index_pixels(points, size),
            Layer::Detail => self.time_pixels(points, size, time_range)?,
        };

        let stroke_d = self.smooth_path(&pixels);
        let fill_d = format!(
            "{} L {:.2} {:.2} L 0 {:.2} Z",
            stroke_d, size.width, size.height, size.height
        );

        let markers = match layer {
            Layer::Overview => Vec::new(),
            Layer::Detail => points
                .iter()
                .zip(&pixels)
                .filter(|(p, _)| p.is_label_anchor)
                .map(|(p, px)| Marker { x: px.x, y: px.y, time: p.time, value: p.value })
                .collect(),
        };

        Some(CurveGeometry { fill_d, stroke_d, markers, size })
    }

    fn index_pixels(&self, points: &[PlotPoint], size: PlotSize) -> Vec<Pixel> {
        let step = size.width / (points.len() - 1) as f64;
        points
            .iter()
            .enumerate()
            .map(|(i, p)| Pixel {
                x: i as f64 * step,
                y: size.height - p.value / 100.0 * size.height,
            })
            .collect()
    }

    fn time_pixels(
        &self,
        points: &[PlotPoint],
        size: PlotSize,
        time_range: Option<TimeWindow>,
    ) -> Option<Vec<Pixel>> {
        let range = time_range.unwrap_or_else(|| {
            TimeWindow::new(points[0].time, points[points.len() - 1].time)
        });
        let span = range.duration_ms() as f64;
        if span <= 0.0 {
            return None;
        }
        let value_height = size.height * self.detail_value_scale;
        Some(
            points
                .iter()
                .map(|p| Pixel {
                    x: (p.time.value() - range.start.value()) as f64 / span * size.width,
                    y: size.height - p.value / 100.0 * value_height,
                })
                .collect(),
        )
    }

    /// Control point for `current`, pulled along the direction `previous -> next`.
    /// The trailing control point of a segment end uses the reversed direction.
    fn control_point(&self, current: Pixel, previous: Pixel, next: Pixel, reverse: bool) -> Pixel {
        let dx = next.x - previous.x;
        let dy = next.y - previous.y;
        let angle = dy.atan2(dx) + if reverse { PI } else { 0.0 };
        let length = dx.hypot(dy) * self.smoothing;
        Pixel { x: current.x + angle.cos() * length, y: current.y + angle.sin() * length }
    }

    fn smooth_path(&self, pixels: &[Pixel]) -> String {
        let mut d = String::with_capacity(pixels.len() * 48);
        let _ = write!(d, "M {:.2} {:.2}", pixels[0].x, pixels[0].y);
        for i in 0..pixels.len() - 1 {
            let p0 = pixels[i];
            let p1 = pixels[i + 1];
            let before = if i > 0 { pixels[i - 1] } else { p0 };
            let after = pixels.get(i + 2).copied().unwrap_or(p1);

            let c1 = self.control_point(p0, before, p1, false);
            let c2 = self.control_point(p1, p0, after, true);
            let _ = write!(
                d,
                " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                c1.x, c1.y, c2.x, c2.y, p1.x, p1.y
            );
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: i64, value: f64) -> PlotPoint {
        PlotPoint { time: Timestamp::from_millis(time), value, is_label_anchor: false }
    }

    #[test]
    fn two_flat_points_give_a_straight_bezier() {
        let points = [point(0, 50.0), point(10, 50.0)];
        let geometry = CurveBuilder::default()
            .build(&points, PlotSize::new(100.0, 50.0), Layer::Overview, None)
            .unwrap();
        assert_eq!(geometry.stroke_d, "M 0.00 25.00 C 20.00 25.00, 80.00 25.00, 100.00 25.00");
        assert_eq!(geometry.fill_d, format!("{} L 100.00 50.00 L 0 50.00 Z", geometry.stroke_d));
        assert!(geometry.markers.is_empty());
    }

    #[test]
    fn detail_keeps_headroom() {
        let points = [point(0, 100.0), point(10, 100.0)];
        let geometry = CurveBuilder::default()
            .build(&points, PlotSize::new(100.0, 100.0), Layer::Detail, None)
            .unwrap();
        // value 100 maps to 80% of the height, leaving 20px free at the top
        assert!(geometry.stroke_d.starts_with("M 0.00 20.00"));
    }

    #[test]
    fn degenerate_inputs_draw_nothing() {
        let builder = CurveBuilder::default();
        let size = PlotSize::new(400.0, 100.0);
        assert!(builder.build(&[point(0, 1.0)], size, Layer::Detail, None).is_none());
        let flat = PlotSize::new(0.0, 100.0);
        let pair = [point(0, 1.0), point(5, 2.0)];
        assert!(builder.build(&pair, flat, Layer::Detail, None).is_none());
        let same_time = [point(5, 1.0), point(5, 2.0)];
        assert!(builder.build(&same_time, size, Layer::Detail, None).is_none());
    }

    #[test]
    fn markers_only_on_anchors_in_detail() {
        let mut points = vec![point(0, 10.0), point(5, 20.0), point(10, 30.0)];
        points[1].is_label_anchor = true;
        let size = PlotSize::new(100.0, 100.0);
        let detail = CurveBuilder::default().build(&points, size, Layer::Detail, None).unwrap();
        assert_eq!(detail.markers.len(), 1);
        assert!((detail.markers[0].x - 50.0).abs() < 1e-9);
        assert!((detail.markers[0].y - 84.0).abs() < 1e-9);
        let overview = CurveBuilder::default().build(&points, size, Layer::Overview, None).unwrap();
        assert!(overview.markers.is_empty());
    }

    #[test]
    fn explicit_range_maps_outside_points_beyond_the_frame() {
        let points = [point(0, 10.0), point(20, 10.0)];
        let range = TimeWindow::new(Timestamp::from_millis(5), Timestamp::from_millis(15));
        let geometry = CurveBuilder::default()
            .build(&points, PlotSize::new(100.0, 10.0), Layer::Detail, Some(range))
            .unwrap();
        assert!(geometry.stroke_d.starts_with("M -50.00"));
        assert!(geometry.stroke_d.ends_with("150.00 9.20"));
    }

    #[test]
    fn anchors_are_interpolated_or_flagged() {
        let series = FullSeries::from_samples(vec![
            Sample::new(Timestamp::from_millis(0), 10.0),
            Sample::new(Timestamp::from_millis(10), 30.0),
        ])
        .unwrap();
        let labels = [Timestamp::from_millis(0), Timestamp::from_millis(5)];
        let points = with_label_anchors(&series, series.samples(), &labels);
        assert_eq!(points.len(), 3);
        assert!(points[0].is_label_anchor);
        assert_eq!(points[1].time.value(), 5);
        assert!((points[1].value - 20.0).abs() < 1e-9);
        assert!(!points[2].is_label_anchor);
    }
}
