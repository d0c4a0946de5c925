use crate::application::ChartOrchestrator;
use crate::domain::logging::LogComponent;
use crate::domain::series::Preset;
use crate::infrastructure::rendering::SignalSurface;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the session's orchestrator, cloned into every component and
/// event closure.
#[derive(Clone)]
pub struct ChartsHandle {
    orchestrator: Rc<RefCell<ChartOrchestrator<SignalSurface>>>,
    current_preset: RwSignal<Preset>,
}

impl ChartsHandle {
    pub fn new(orchestrator: ChartOrchestrator<SignalSurface>) -> Self {
        let current_preset = create_rw_signal(orchestrator.current_preset());
        Self { orchestrator: Rc::new(RefCell::new(orchestrator)), current_preset }
    }

    /// Run `f` against the orchestrator. A re-entrant call is dropped with a warning
    /// instead of panicking.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut ChartOrchestrator<SignalSurface>) -> R,
    ) -> Option<R> {
        match self.orchestrator.try_borrow_mut() {
            Ok(mut orchestrator) => Some(f(&mut orchestrator)),
            Err(_) => {
                crate::log_warn!(
                    LogComponent::Presentation("ChartsHandle"),
                    "orchestrator busy, event dropped"
                );
                None
            }
        }
    }

    pub fn select_preset(&self, preset: Preset) {
        if self.with(|o| o.select_preset(preset)).is_some() {
            self.current_preset.set(preset);
        }
    }

    /// Reactive view of the active preset for the controls.
    pub fn current_preset(&self) -> ReadSignal<Preset> {
        self.current_preset.read_only()
    }

    pub fn chart_titles(&self) -> Vec<String> {
        self.orchestrator
            .try_borrow()
            .map(|o| o.context().config.charts.clone())
            .unwrap_or_default()
    }
}
