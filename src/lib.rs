use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

pub use presentation::PerformanceCharts;

/// Install the browser logger, clock and panic hook before any chart is created.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    let clock = infrastructure::services::BrowserTimeProvider::new();
    domain::logging::init_time_provider(Box::new(clock));

    crate::log_info!(LogComponent::Presentation("Initialize"), "performance charts ready");
}
