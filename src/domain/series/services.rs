use super::entities::{FullSeries, Sample};
use super::value_objects::Timestamp;
use crate::domain::logging::LogComponent;

/// Source of uniform numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

pub const DEFAULT_POINT_COUNT: usize = 200;

pub const VALUE_FLOOR: f64 = 5.0;
pub const VALUE_CEILING: f64 = 95.0;

/// Domain service - synthetic series as a bounded random walk
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    point_count: usize,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_COUNT)
    }
}

impl SeriesGenerator {
    pub fn new(point_count: usize) -> Self {
        Self { point_count: point_count.max(2) }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Evenly spaced samples over `[now - total_minutes, now]`.
    pub fn generate(
        &self,
        total_minutes: u32,
        reference_now: Timestamp,
        rng: &mut dyn RandomSource,
    ) -> FullSeries {
        let start = reference_now.minus_minutes(total_minutes);
        let span = (reference_now.value() - start.value()) as f64;
        let step = span / (self.point_count - 1) as f64;

        let mut samples = Vec::with_capacity(self.point_count);
        let mut value = 30.0 + rng.next_f64() * 40.0;
        for i in 0..self.point_count {
            if i > 0 {
                value = Self::walk(value, rng);
            }
            let time = if i + 1 == self.point_count {
                reference_now
            } else {
                start.plus_millis((i as f64 * step).round() as i64)
            };
            samples.push(Sample::new(time, value));
        }

        crate::log_debug!(
            LogComponent::Domain("SeriesGenerator"),
            "generated {} samples over {} min",
            samples.len(),
            total_minutes
        );

        FullSeries::from_sorted(samples)
    }

    /// One random-walk step. Out-of-range results are re-drawn just inside the bound
    /// rather than clipped, so the curve never flattens against it.
    fn walk(previous: f64, rng: &mut dyn RandomSource) -> f64 {
        let next = previous + (rng.next_f64() - 0.5) * 10.0;
        if next < VALUE_FLOOR {
            VALUE_FLOOR + rng.next_f64() * 5.0
        } else if next > VALUE_CEILING {
            VALUE_CEILING - rng.next_f64() * 5.0
        } else {
            next
        }
    }
}
