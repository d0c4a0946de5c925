pub mod charts_handle;
pub mod container_observer;
pub mod pointer_events;
pub mod wasm_api;

pub use charts_handle::ChartsHandle;
pub use wasm_api::PerformanceCharts;
