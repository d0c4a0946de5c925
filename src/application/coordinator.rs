use super::range_controller::RangeController;
use crate::domain::{
    chart::{ChartConfig, ContainerSizes, DrawingSurface},
    errors::{AppError, ChartResult},
    logging::{LogComponent, TimeProvider},
    series::{Preset, RandomSource, Sample, Timestamp},
};
use crate::view_state::Grip;
use std::sync::Arc;

/// Per-session values shared by every chart. The reference instant is captured once,
/// so all charts stay time-consistent while the wall clock moves on.
#[derive(Clone)]
pub struct SessionContext {
    pub reference_now: Timestamp,
    /// Local time zone used to format axis labels.
    pub local_time: Arc<dyn TimeProvider>,
    pub config: ChartConfig,
}

impl SessionContext {
    pub fn new(
        reference_now: Timestamp,
        local_time: Arc<dyn TimeProvider>,
        config: ChartConfig,
    ) -> Self {
        Self { reference_now, local_time, config }
    }
}

/// Owns every chart card of a session and keeps them on the same preset.
pub struct ChartOrchestrator<S: DrawingSurface> {
    context: SessionContext,
    current_preset: Preset,
    charts: Vec<RangeController<S>>,
    rng: Box<dyn RandomSource>,
}

impl<S: DrawingSurface> ChartOrchestrator<S> {
    pub fn new(context: SessionContext, rng: Box<dyn RandomSource>) -> Self {
        crate::log_info!(
            LogComponent::Application("ChartOrchestrator"),
            "session at {} ms, initial preset {}",
            context.reference_now,
            context.config.initial_preset
        );
        Self { current_preset: context.config.initial_preset, context, charts: Vec::new(), rng }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn current_preset(&self) -> Preset {
        self.current_preset
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn chart(&self, index: usize) -> Option<&RangeController<S>> {
        self.charts.get(index)
    }

    /// Add a chart for a mounted card and put it on the session preset at full
    /// range. `None` means the card's elements were not available; that card is
    /// skipped and the others are unaffected.
    pub fn register_chart(&mut self, surface: Option<S>) -> Option<usize> {
        let Some(surface) = surface else {
            crate::log_warn!(
                LogComponent::Application("ChartOrchestrator"),
                "chart mount not ready, skipping initialization"
            );
            return None;
        };
        let index = self.charts.len();
        let mut controller = RangeController::new(
            index,
            surface,
            self.current_preset,
            self.context.reference_now,
            self.context.local_time.clone(),
            &self.context.config,
            self.rng.as_mut(),
        );
        controller.set_range(self.current_preset, self.rng.as_mut());
        self.charts.push(controller);
        Some(index)
    }

    /// Switch every chart to `preset`.
    pub fn select_preset(&mut self, preset: Preset) {
        crate::log_info!(
            LogComponent::Application("ChartOrchestrator"),
            "preset {} -> {} on {} charts",
            self.current_preset,
            preset,
            self.charts.len()
        );
        self.current_preset = preset;
        for chart in &mut self.charts {
            chart.set_range(preset, self.rng.as_mut());
        }
    }

    pub fn on_container_resized(&mut self, index: usize, sizes: ContainerSizes) {
        if let Some(chart) = self.charts.get_mut(index) {
            chart.on_container_resized(sizes);
        }
    }

    pub fn pointer_down(&mut self, index: usize, grip: Grip, pointer_x: f64) -> bool {
        self.charts.get_mut(index).is_some_and(|chart| chart.pointer_down(grip, pointer_x))
    }

    /// Forward a pointer position to every chart; only charts with an interaction in
    /// progress react.
    pub fn pointer_move(&mut self, pointer_x: f64) -> bool {
        let mut changed = false;
        for chart in &mut self.charts {
            changed |= chart.pointer_move(pointer_x);
        }
        changed
    }

    /// Pointer up or cancel anywhere ends every interaction.
    pub fn pointer_up(&mut self) {
        for chart in &mut self.charts {
            chart.pointer_up();
        }
    }

    /// Replace the dataset of one chart for `preset`.
    pub fn update_data(
        &mut self,
        index: usize,
        preset: Preset,
        samples: Vec<Sample>,
    ) -> ChartResult<()> {
        let chart = self
            .charts
            .get_mut(index)
            .ok_or_else(|| AppError::ValidationError(format!("no chart at index {}", index)))?;
        chart.update_data(preset, samples, self.rng.as_mut())
    }
}
