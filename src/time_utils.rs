use crate::domain::series::Timestamp;
use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};

/// Tracks up to one day long label with the clock time, longer ones with the date.
pub const INTRADAY_LIMIT_MINUTES: u32 = 1_440;

/// Month abbreviations used on date labels.
pub const MONTHS: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

/// Format a label timestamp for a track spanning `total_minutes`.
///
/// - `total_minutes <= 1440` -> `h:mm AM` / `h:mm PM`
/// - otherwise -> day of month and month abbreviation, e.g. `3 MAR`, `25 DIC`
///
/// `utc_offset_minutes` is the viewer's offset in force at `timestamp`.
pub fn format_smart_label(
    timestamp: Timestamp,
    total_minutes: u32,
    utc_offset_minutes: i32,
) -> String {
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp.value()) else {
        return String::new();
    };
    let local = utc.with_timezone(&offset);

    if total_minutes <= INTRADAY_LIMIT_MINUTES {
        local.format("%-I:%M %p").to_string()
    } else {
        format!("{} {}", local.day(), MONTHS[local.month0() as usize])
    }
}
