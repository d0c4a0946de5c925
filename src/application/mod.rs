pub mod coordinator;
pub mod frame_throttle;
pub mod range_controller;

pub use coordinator::*;
pub use frame_throttle::*;
pub use range_controller::*;
