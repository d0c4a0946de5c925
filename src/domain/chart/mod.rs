//! Chart aggregate: plot geometry, label scheduling and the drawing-surface port.

pub mod config;
pub mod curve;
pub mod services;
pub mod surface;
pub mod value_objects;

pub use config::*;
pub use curve::*;
pub use services::*;
pub use surface::*;
pub use value_objects::*;
