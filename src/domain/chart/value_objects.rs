use crate::domain::series::Timestamp;
use derive_more::Display;
use serde::Serialize;

/// Which of the two plots of a chart card is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Layer {
    /// Windowed, time-mapped main plot with label markers.
    #[display(fmt = "main")]
    Detail,
    /// Full series, index-mapped navigator plot.
    #[display(fmt = "mini")]
    Overview,
}

/// Value Object - measured pixel size of a plot area
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl PlotSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero or non-finite sizes cannot be drawn into.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Value Object - everything a chart card measures on layout changes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerSizes {
    pub track_width: f64,
    pub detail: PlotSize,
    pub overview: PlotSize,
}

/// Value Object - visible slice of the track, in absolute time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    pub fn duration_ms(&self) -> i64 {
        self.end.value() - self.start.value()
    }

    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time <= self.end
    }

    /// Position of `time` inside the window, 0..=100 for contained instants.
    pub fn pct_of(&self, time: Timestamp) -> f64 {
        let duration = self.duration_ms();
        if duration <= 0 {
            return 0.0;
        }
        (time.value() - self.start.value()) as f64 / duration as f64 * 100.0
    }

    /// Window grown by `ratio` of its duration on both sides.
    pub fn padded(&self, ratio: f64) -> TimeWindow {
        let pad = (self.duration_ms() as f64 * ratio).round() as i64;
        TimeWindow::new(self.start.plus_millis(-pad), self.end.plus_millis(pad))
    }
}

/// Value Object - the full time span a chart covers: `total_minutes` back from `reference_now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub reference_now: Timestamp,
    pub total_minutes: u32,
}

impl Track {
    pub fn new(reference_now: Timestamp, total_minutes: u32) -> Self {
        Self { reference_now, total_minutes }
    }

    pub fn start(&self) -> Timestamp {
        self.reference_now.minus_minutes(self.total_minutes)
    }

    pub fn total_millis(&self) -> i64 {
        self.reference_now.value() - self.start().value()
    }

    /// Time slice selected by a window given as percentages of the track.
    pub fn window_for(&self, left_pct: f64, width_pct: f64) -> TimeWindow {
        let total = self.total_millis() as f64;
        let start = self.start().plus_millis((left_pct / 100.0 * total).round() as i64);
        let end = start.plus_millis((width_pct / 100.0 * total).round() as i64);
        TimeWindow::new(start, end)
    }
}

/// Value Object - one scheduled axis label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelPoint {
    pub time: Timestamp,
    pub text: String,
}

impl LabelPoint {
    /// `"2:05 PM"` -> `("2:05", "PM")`, `"3 MAR"` -> `("3", "MAR")`.
    pub fn split_suffix(&self) -> (&str, &str) {
        self.text.rsplit_once(' ').unwrap_or((self.text.as_str(), ""))
    }
}

/// Horizontal alignment of a label relative to its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum LabelAnchor {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "middle")]
    Middle,
    #[display(fmt = "end")]
    End,
}

impl LabelAnchor {
    /// Labels close to a frame edge hang inwards so they are never cut off.
    pub fn for_pct(pct: f64) -> Self {
        if pct < 5.0 {
            Self::Start
        } else if pct > 95.0 {
            Self::End
        } else {
            Self::Middle
        }
    }

    /// CSS translation matching the anchor.
    pub fn translate_x(&self) -> &'static str {
        match self {
            Self::Start => "translateX(0%)",
            Self::Middle => "translateX(-50%)",
            Self::End => "translateX(-100%)",
        }
    }
}

/// Value Object - a label positioned on the detail x-axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label: LabelPoint,
    pub pct: f64,
    pub anchor: LabelAnchor,
}

/// Value Object - visual parameters of one rendered curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveStyle {
    pub color: &'static str,
    pub top_opacity: f64,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub marker_hover_radius: f64,
}

pub const CURVE_COLOR: &str = "#00d2ff";

impl CurveStyle {
    pub fn for_layer(layer: Layer, marker_radius: f64, marker_hover_radius: f64) -> Self {
        match layer {
            Layer::Detail => Self {
                color: CURVE_COLOR,
                top_opacity: 0.6,
                stroke_width: 2.0,
                marker_radius,
                marker_hover_radius,
            },
            Layer::Overview => Self {
                color: CURVE_COLOR,
                top_opacity: 0.4,
                stroke_width: 1.0,
                marker_radius,
                marker_hover_radius,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::MS_PER_MINUTE;

    #[test]
    fn track_window_maps_percentages_to_time() {
        let now = Timestamp::from_millis(1_000 * MS_PER_MINUTE);
        let track = Track::new(now, 120);
        let window = track.window_for(87.5, 12.5);
        assert_eq!(window.start.value(), (1_000 - 15) * MS_PER_MINUTE);
        assert_eq!(window.end, now);
        assert_eq!(track.window_for(0.0, 100.0), TimeWindow::new(track.start(), now));
    }

    #[test]
    fn anchors_hug_the_edges() {
        assert_eq!(LabelAnchor::for_pct(0.0), LabelAnchor::Start);
        assert_eq!(LabelAnchor::for_pct(50.0), LabelAnchor::Middle);
        assert_eq!(LabelAnchor::for_pct(100.0), LabelAnchor::End);
    }

    #[test]
    fn suffix_split() {
        let label = LabelPoint { time: Timestamp::from_millis(0), text: "2:05 PM".into() };
        assert_eq!(label.split_suffix(), ("2:05", "PM"));
    }

    #[test]
    fn degenerate_sizes_are_not_drawable() {
        assert!(!PlotSize::new(0.0, 100.0).is_drawable());
        assert!(!PlotSize::new(400.0, f64::NAN).is_drawable());
        assert!(PlotSize::new(400.0, 60.0).is_drawable());
    }
}
