use std::str::FromStr;
use std::sync::Arc;

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::ChartsHandle;
use crate::app::App;
use crate::application::{ChartOrchestrator, SessionContext};
use crate::domain::{
    chart::{ChartConfig, Layer},
    errors::{AppError, ChartResult},
    logging::{LogComponent, TimeProvider},
    series::{Preset, Sample, Timestamp},
};
use crate::infrastructure::services::{BrowserRandom, BrowserTimeProvider};

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn parse_preset(name: &str) -> ChartResult<Preset> {
    Preset::from_str(name)
        .map_err(|_| AppError::ValidationError(format!("unknown preset '{}'", name)))
}

fn parse_layer(name: &str) -> ChartResult<Layer> {
    match name {
        "main" => Ok(Layer::Detail),
        "mini" => Ok(Layer::Overview),
        other => Err(AppError::ValidationError(format!("unknown layer '{}'", other))),
    }
}

/// JavaScript entry point: one session of synchronized performance charts.
#[wasm_bindgen]
pub struct PerformanceCharts {
    charts: ChartsHandle,
}

#[wasm_bindgen]
impl PerformanceCharts {
    /// Create a session. `config_json` may be omitted or empty for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PerformanceCharts, JsValue> {
        let config = ChartConfig::from_json(config_json.as_deref().unwrap_or_default())?;
        let clock = BrowserTimeProvider::new();
        let context = SessionContext::new(
            Timestamp::from_millis(clock.current_timestamp()),
            Arc::new(clock),
            config,
        );
        let orchestrator = ChartOrchestrator::new(context, Box::new(BrowserRandom));
        Ok(Self { charts: ChartsHandle::new(orchestrator) })
    }

    /// Render the preset controls and chart cards into the element with `element_id`.
    pub fn mount(&self, element_id: &str) -> Result<(), JsValue> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| AppError::RenderingError(format!("element #{} not found", element_id)))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| {
                AppError::RenderingError(format!("#{} is not an HTML element", element_id))
            })?;

        crate::log_info!(
            LogComponent::Presentation("PerformanceCharts"),
            "mounting into #{}",
            element_id
        );
        let charts = self.charts.clone();
        mount_to(element, move || view! { <App charts=charts /> });
        Ok(())
    }

    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&self, preset: &str) -> Result<(), JsValue> {
        let preset = parse_preset(preset)?;
        self.charts.select_preset(preset);
        Ok(())
    }

    #[wasm_bindgen(js_name = currentPreset)]
    pub fn current_preset(&self) -> String {
        self.charts.current_preset().get_untracked().to_string()
    }

    #[wasm_bindgen(js_name = chartCount)]
    pub fn chart_count(&self) -> usize {
        self.charts.with(|o| o.chart_count()).unwrap_or(0)
    }

    /// Replace the samples behind one chart for `preset`.
    ///
    /// `samples_json` is an array of `{ "time": <ms>, "value": <number> }`, strictly
    /// ascending in time.
    #[wasm_bindgen(js_name = updateData)]
    pub fn update_data(
        &self,
        chart_index: usize,
        preset: &str,
        samples_json: &str,
    ) -> Result<(), JsValue> {
        let preset = parse_preset(preset)?;
        let samples: Vec<Sample> = serde_json::from_str(samples_json)
            .map_err(|e| AppError::ValidationError(format!("invalid samples: {}", e)))?;
        self.charts
            .with(|o| o.update_data(chart_index, preset, samples))
            .unwrap_or_else(|| Err(AppError::RenderingError("charts are busy".to_string())))?;
        Ok(())
    }

    /// Current drawing of one plot (`"main"` or `"mini"`) as a standalone SVG document.
    #[wasm_bindgen(js_name = exportSvg)]
    pub fn export_svg(&self, chart_index: usize, layer: &str) -> Result<Option<String>, JsValue> {
        let layer = parse_layer(layer)?;
        Ok(self
            .charts
            .with(|o| o.chart(chart_index).and_then(|c| c.surface().export_svg(layer)))
            .flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_follow_controls() {
        assert_eq!(parse_preset("3h"), Ok(Preset::ThreeHours));
        assert_eq!(parse_preset("30d"), Ok(Preset::ThirtyDays));
        assert!(matches!(parse_preset("2h"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn layer_names_match_gradient_suffixes() {
        assert_eq!(parse_layer("main"), Ok(Layer::Detail));
        assert_eq!(parse_layer("mini"), Ok(Layer::Overview));
        assert!(parse_layer("detail").is_err());
    }
}
