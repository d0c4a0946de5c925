use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

pub const MS_PER_MINUTE: i64 = 60_000;

/// Value Object - milliseconds since the Unix epoch
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn minus_minutes(&self, minutes: u32) -> Self {
        Self(self.0 - minutes as i64 * MS_PER_MINUTE)
    }

    pub fn plus_millis(&self, millis: i64) -> Self {
        Self(self.0 + millis)
    }
}

/// Value Object - time-range preset selected by the host controls
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Preset {
    #[default]
    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,

    #[strum(serialize = "3h")]
    #[serde(rename = "3h")]
    ThreeHours,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    SevenDays,

    #[strum(serialize = "30d")]
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl Preset {
    /// Span covered by the full series, measured back from the reference instant.
    pub fn total_minutes(&self) -> u32 {
        match self {
            Self::FifteenMinutes => 120,
            Self::ThreeHours => 1_440,
            Self::OneDay => 10_080,
            Self::SevenDays => 129_600,
            Self::ThirtyDays => 259_200,
        }
    }

    /// Distance between axis labels. Also the span the preset is named after.
    pub fn label_step_minutes(&self) -> u32 {
        match self {
            Self::FifteenMinutes => 15,
            Self::ThreeHours => 180,
            Self::OneDay => 1_440,
            Self::SevenDays => 10_080,
            Self::ThirtyDays => 43_200,
        }
    }

    pub fn visible_minutes(&self) -> u32 {
        self.label_step_minutes()
    }

    pub fn default_window_pct(&self) -> f64 {
        self.visible_minutes() as f64 / self.total_minutes() as f64 * 100.0
    }

    pub fn total_millis(&self) -> i64 {
        self.total_minutes() as i64 * MS_PER_MINUTE
    }
}
