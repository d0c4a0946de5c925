pub use super::value_objects::Timestamp;
use crate::domain::errors::{AppError, ChartResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Domain entity - one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: Timestamp,
    pub value: f64,
}

impl Sample {
    pub fn new(time: Timestamp, value: f64) -> Self {
        Self { time, value }
    }
}

/// Domain entity - the full-resolution series behind one chart.
///
/// Immutable between regenerations. Clones share the same backing buffer, so the
/// overview and the detail view always read identical values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FullSeries {
    samples: Arc<Vec<Sample>>,
}

impl FullSeries {
    /// Wrap samples that are already known to be time-ascending.
    pub(crate) fn from_sorted(samples: Vec<Sample>) -> Self {
        Self { samples: Arc::new(samples) }
    }

    /// Validate an externally supplied dataset.
    pub fn from_samples(samples: Vec<Sample>) -> ChartResult<Self> {
        if samples.is_empty() {
            return Err(AppError::ValidationError("series is empty".to_string()));
        }
        if let Some(bad) = samples.iter().position(|s| !s.value.is_finite()) {
            return Err(AppError::ValidationError(format!("sample {} has a non-finite value", bad)));
        }
        // Every time difference between representable instants fits in an i64.
        if let Some(bad) = samples
            .iter()
            .position(|s| DateTime::<Utc>::from_timestamp_millis(s.time.value()).is_none())
        {
            return Err(AppError::ValidationError(format!(
                "sample {} has a time outside the calendar range",
                bad
            )));
        }
        if let Some(pair) = samples.windows(2).position(|w| w[1].time <= w[0].time) {
            return Err(AppError::ValidationError(format!(
                "samples must be strictly time-ascending (index {})",
                pair + 1
            )));
        }
        Ok(Self::from_sorted(samples))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// True when both handles point at the same buffer.
    pub fn shares_buffer_with(&self, other: &FullSeries) -> bool {
        Arc::ptr_eq(&self.samples, &other.samples)
    }

    /// Samples with `start <= time <= end`.
    pub fn between(&self, start: Timestamp, end: Timestamp) -> &[Sample] {
        let from = self.samples.partition_point(|s| s.time < start);
        let to = self.samples.partition_point(|s| s.time <= end);
        if from >= to { &[] } else { &self.samples[from..to] }
    }

    /// Value of the polyline through the samples at `time`.
    ///
    /// Outside the series bounds the nearest endpoint value is returned; an empty
    /// series yields 0.
    pub fn value_at(&self, time: Timestamp) -> f64 {
        let next = self.samples.partition_point(|s| s.time < time);
        match (next, self.samples.len()) {
            (_, 0) => 0.0,
            (0, _) => self.samples[0].value,
            (n, len) if n >= len => self.samples[len - 1].value,
            (n, _) => {
                let a = self.samples[n - 1];
                let b = self.samples[n];
                let ratio = (time.value() - a.time.value()) as f64
                    / (b.time.value() - a.time.value()) as f64;
                a.value + (b.value - a.value) * ratio
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> FullSeries {
        FullSeries::from_samples(vec![
            Sample::new(Timestamp::from_millis(0), 10.0),
            Sample::new(Timestamp::from_millis(100), 20.0),
            Sample::new(Timestamp::from_millis(200), 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn interpolates_between_brackets() {
        let s = series();
        assert!((s.value_at(Timestamp::from_millis(50)) - 15.0).abs() < 1e-9);
        assert!((s.value_at(Timestamp::from_millis(150)) - 30.0).abs() < 1e-9);
        assert!((s.value_at(Timestamp::from_millis(100)) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_to_endpoints_outside_bounds() {
        let s = series();
        assert_eq!(s.value_at(Timestamp::from_millis(-10)), 10.0);
        assert_eq!(s.value_at(Timestamp::from_millis(500)), 40.0);
        assert_eq!(FullSeries::default().value_at(Timestamp::from_millis(1)), 0.0);
    }

    #[test]
    fn between_is_inclusive() {
        let s = series();
        let slice = s.between(Timestamp::from_millis(100), Timestamp::from_millis(200));
        assert_eq!(slice.len(), 2);
        assert!(s.between(Timestamp::from_millis(300), Timestamp::from_millis(400)).is_empty());
    }

    #[test]
    fn rejects_unordered_and_empty() {
        let unordered = vec![
            Sample::new(Timestamp::from_millis(5), 1.0),
            Sample::new(Timestamp::from_millis(5), 2.0),
        ];
        assert!(FullSeries::from_samples(unordered).is_err());
        assert!(FullSeries::from_samples(Vec::new()).is_err());
        let nan = vec![Sample::new(Timestamp::from_millis(5), f64::NAN)];
        assert!(FullSeries::from_samples(nan).is_err());
    }

    #[test]
    fn rejects_times_beyond_the_calendar() {
        let extreme = vec![
            Sample::new(Timestamp::from_millis(-9_000_000_000_000_000_000), 1.0),
            Sample::new(Timestamp::from_millis(9_000_000_000_000_000_000), 2.0),
        ];
        assert!(matches!(FullSeries::from_samples(extreme), Err(AppError::ValidationError(_))));

        let far_but_valid = vec![
            Sample::new(Timestamp::from_millis(-8_000_000_000_000_000), 1.0),
            Sample::new(Timestamp::from_millis(8_000_000_000_000_000), 2.0),
        ];
        let series = FullSeries::from_samples(far_but_valid).unwrap();
        assert!((series.value_at(Timestamp::from_millis(0)) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn clones_share_storage() {
        let s = series();
        let copy = s.clone();
        assert!(copy.shares_buffer_with(&s));
    }
}
