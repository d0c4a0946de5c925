//! Browser-backed implementations of the domain service traits.

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use crate::domain::series::RandomSource;
use wasm_bindgen::JsValue;

/// Console logger for the WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = BrowserTimeProvider.format_timestamp(entry.timestamp);
        format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = JsValue::from_str(&Self::format_log_entry(&entry));
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock and local time zone of the browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    fn utc_offset_minutes_at(&self, timestamp: i64) -> i32 {
        // JS reports minutes *behind* UTC
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
        -(date.get_timezone_offset() as i32)
    }

    fn format_timestamp(&self, timestamp: i64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// `Math.random()` as a [`RandomSource`]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
