//! WASM bindings for contention-core.
//!
//! Exposes histogram computation and the ranked contention report to JavaScript
//! via `wasm-bindgen`. All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p contention-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/contention_wasm.wasm
//! ```

use contention_core::{
    parse_mentorships, AnalyzerConfig, ContentionAnalyzer, ContentionReport, Histogram,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Plain-Rust entry points (testable off-wasm)
// ---------------------------------------------------------------------------

/// Build an analyzer from an optional JSON config object. Missing fields take
/// their defaults; `None` or an empty string means all defaults.
fn analyzer_from_json(config_json: Option<&str>) -> Result<ContentionAnalyzer, String> {
    let config = match config_json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str::<AnalyzerConfig>(json)
            .map_err(|e| format!("Invalid config JSON: {}", e))?,
        None => AnalyzerConfig::default(),
    };
    ContentionAnalyzer::new(&config).map_err(|e| e.to_string())
}

fn histogram_json(mentorships_json: &str, config_json: Option<&str>) -> Result<String, String> {
    let analyzer = analyzer_from_json(config_json)?;
    let mentorships = parse_mentorships(mentorships_json).map_err(|e| e.to_string())?;
    let histogram: Histogram = analyzer.histogram(&mentorships);
    to_json(&histogram)
}

fn report_json(mentorships_json: &str, config_json: Option<&str>) -> Result<String, String> {
    let analyzer = analyzer_from_json(config_json)?;
    let mentorships = parse_mentorships(mentorships_json).map_err(|e| e.to_string())?;
    let report: ContentionReport = analyzer.report(&mentorships);
    to_json(&report)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the per-bucket call counts for a JSON array of mentorships.
///
/// Returns a JSON object mapping bucket offset (minutes since cycle start, as a
/// string key) to call count. `config_json` is an optional object with any of
/// `meeting_duration_minutes`, `bucket_size_minutes`, `cycle_weeks`.
#[wasm_bindgen(js_name = "computeHistogram")]
pub fn compute_histogram(
    mentorships_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    histogram_json(mentorships_json, config_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Analyze a JSON array of mentorships and return the ranked contention report.
///
/// The report lists mentorships worst-contention first, with per-bucket counts
/// and peak flags for each scheduled call.
#[wasm_bindgen(js_name = "analyzeSchedules")]
pub fn analyze_schedules(
    mentorships_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    report_json(mentorships_json, config_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}
