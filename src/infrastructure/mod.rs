pub mod rendering;
pub mod services;

pub use services::{BrowserRandom, BrowserTimeProvider, ConsoleLogger};
