use super::curve::{DEFAULT_DETAIL_VALUE_SCALE, DEFAULT_SMOOTHING};
use super::services::DEFAULT_LABEL_ITERATION_LIMIT;
use crate::domain::errors::{AppError, ChartResult};
use crate::domain::series::{DEFAULT_POINT_COUNT, Preset};
use serde::{Deserialize, Serialize};

/// Dashboard configuration, deserialized from host JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub point_count: usize,
    pub min_width_pct: f64,
    pub max_width_pct: f64,
    pub smoothing: f64,
    pub detail_value_scale: f64,
    pub render_buffer_ratio: f64,
    pub label_iteration_limit: usize,
    pub marker_radius: f64,
    pub marker_hover_radius: f64,
    pub initial_preset: Preset,
    /// One chart card per title.
    pub charts: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            min_width_pct: 5.0,
            max_width_pct: 100.0,
            smoothing: DEFAULT_SMOOTHING,
            detail_value_scale: DEFAULT_DETAIL_VALUE_SCALE,
            render_buffer_ratio: 0.2,
            label_iteration_limit: DEFAULT_LABEL_ITERATION_LIMIT,
            marker_radius: 3.0,
            marker_hover_radius: 6.0,
            initial_preset: Preset::FifteenMinutes,
            charts: vec!["Download".to_string(), "Upload".to_string(), "Latency".to_string()],
        }
    }
}

impl ChartConfig {
    /// Parse host JSON. Blank input means defaults.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.point_count < 2 {
            return Err(AppError::ConfigurationError("point_count must be at least 2".into()));
        }
        if !(self.min_width_pct > 0.0
            && self.min_width_pct <= self.max_width_pct
            && self.max_width_pct <= 100.0)
        {
            return Err(AppError::ConfigurationError(format!(
                "window limits must satisfy 0 < min ({}) <= max ({}) <= 100",
                self.min_width_pct, self.max_width_pct
            )));
        }
        if !(0.0..=1.0).contains(&self.detail_value_scale) {
            return Err(AppError::ConfigurationError(
                "detail_value_scale must be within 0..=1".into(),
            ));
        }
        if self.render_buffer_ratio < 0.0 {
            return Err(AppError::ConfigurationError(
                "render_buffer_ratio must not be negative".into(),
            ));
        }
        Ok(())
    }
}
