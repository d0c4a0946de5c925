use super::value_objects::{AxisLabel, LabelAnchor, LabelPoint, TimeWindow, Track};
use crate::domain::logging::{FixedOffsetClock, LogComponent, TimeProvider};
use crate::domain::series::MS_PER_MINUTE;
use crate::time_utils::format_smart_label;
use std::sync::Arc;

pub const DEFAULT_LABEL_ITERATION_LIMIT: usize = 1_000;

/// Domain service - axis label scheduling
///
/// Labels sit on a grid anchored at the reference instant and stepping backwards, so
/// the grid never shifts while the window is dragged. Each label is formatted with
/// the UTC offset in force at its own instant.
#[derive(Clone)]
pub struct LabelScheduler {
    iteration_limit: usize,
    local_time: Arc<dyn TimeProvider>,
}

impl Default for LabelScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_ITERATION_LIMIT, Arc::new(FixedOffsetClock::UTC))
    }
}

impl LabelScheduler {
    pub fn new(iteration_limit: usize, local_time: Arc<dyn TimeProvider>) -> Self {
        Self { iteration_limit, local_time }
    }

    /// Grid instants inside `visible`, oldest first.
    pub fn schedule(
        &self,
        track: Track,
        visible: TimeWindow,
        step_minutes: u32,
    ) -> Vec<LabelPoint> {
        if step_minutes == 0 {
            crate::log_warn!(
                LogComponent::Domain("LabelScheduler"),
                "label step is zero, no labels scheduled"
            );
            return Vec::new();
        }

        let step_ms = step_minutes as i64 * MS_PER_MINUTE;
        let track_start = track.start();
        let mut current = track.reference_now;
        let mut labels = Vec::new();
        let mut iterations = 0;

        while current >= track_start && iterations < self.iteration_limit {
            if visible.contains(current) {
                let offset = self.local_time.utc_offset_minutes_at(current.value());
                labels.push(LabelPoint {
                    time: current,
                    text: format_smart_label(current, track.total_minutes, offset),
                });
            }
            current = current.plus_millis(-step_ms);
            iterations += 1;
        }

        if iterations == self.iteration_limit && current >= track_start {
            crate::log_warn!(
                LogComponent::Domain("LabelScheduler"),
                "iteration guard hit after {} steps",
                iterations
            );
        }

        labels.reverse();
        labels
    }

    /// Place labels on the detail axis as a percentage of the visible window.
    pub fn position(labels: Vec<LabelPoint>, visible: TimeWindow) -> Vec<AxisLabel> {
        labels
            .into_iter()
            .map(|label| {
                let pct = visible.pct_of(label.time);
                AxisLabel { label, pct, anchor: LabelAnchor::for_pct(pct) }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Timestamp;

    fn now() -> Timestamp {
        // 2024-03-03 14:00:00 UTC
        Timestamp::from_millis(1_709_474_400_000)
    }

    #[test]
    fn full_window_gets_every_step() {
        let track = Track::new(now(), 120);
        let labels = LabelScheduler::default().schedule(track, track.window_for(0.0, 100.0), 15);
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.first().unwrap().time, track.start());
        assert_eq!(labels.last().unwrap().time, now());
        assert_eq!(labels.last().unwrap().text, "2:00 PM");
    }

    #[test]
    fn only_visible_steps_are_kept() {
        let track = Track::new(now(), 120);
        let visible = track.window_for(87.5, 12.5);
        let labels = LabelScheduler::default().schedule(track, visible, 15);
        let texts: Vec<_> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["1:45 PM", "2:00 PM"]);
    }

    #[test]
    fn guard_caps_runaway_schedules() {
        let track = Track::new(now(), 259_200);
        let scheduler = LabelScheduler::new(10, Arc::new(FixedOffsetClock::UTC));
        let labels = scheduler.schedule(track, track.window_for(0.0, 100.0), 1);
        assert_eq!(labels.len(), 10);
        assert!(labels.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn zero_step_yields_nothing() {
        let track = Track::new(now(), 120);
        let labels = LabelScheduler::default().schedule(track, track.window_for(0.0, 100.0), 0);
        assert!(labels.is_empty());
    }

    #[test]
    fn positions_follow_the_window() {
        let track = Track::new(now(), 120);
        let visible = track.window_for(0.0, 100.0);
        let labels = LabelScheduler::default().schedule(track, visible, 60);
        let axis = LabelScheduler::position(labels, visible);
        let anchors: Vec<_> = axis.iter().map(|a| a.anchor).collect();
        assert_eq!(anchors, [LabelAnchor::Start, LabelAnchor::Middle, LabelAnchor::End]);
        assert!((axis[1].pct - 50.0).abs() < 1e-9);
    }
}
