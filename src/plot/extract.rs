// src/plot/extract.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PlotError, PlotResult};

const PLOT_CALL: &str = "Plotly.newPlot";

/// First `[{ ... }]` argument of the `Plotly.newPlot(...)` call.
static TRACE_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Plotly\.newPlot\([^\[]+(\[\s*\{.*?\}\s*\])")
        .expect("trace array pattern should compile")
});

/// One Plotly series. Anything beyond `name`, `x` and `y` is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "empty_array")]
    pub x: Value,
    #[serde(default = "empty_array")]
    pub y: Value,
}

impl Trace {
    /// Display name, `<unnamed>` when the trace has none.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

/// Text of the first `<script>` that calls `Plotly.newPlot`, trimmed.
pub fn find_plot_script(html: &str) -> Option<String> {
    let selector = Selector::parse("script").expect("script selector should parse");
    let doc = Html::parse_document(html);
    let found = doc
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .find(|text| text.contains(PLOT_CALL))
        .map(|text| text.trim().to_string());
    debug!(found = found.is_some(), "scanned scripts");
    found
}

/// Pull the trace array out of a plot script and decode it.
pub fn extract_traces(script: &str) -> PlotResult<Vec<Trace>> {
    let caps = TRACE_ARRAY.captures(script).ok_or(PlotError::NoDataArray)?;
    let raw = &caps[1];
    let traces: Vec<Trace> = serde_json::from_str(raw).map_err(|e| {
        warn!(error = %e, "trace array is not valid JSON");
        PlotError::from(e)
    })?;
    debug!(traces = traces.len(), "decoded traces");
    Ok(traces)
}

/// [`find_plot_script`] then [`extract_traces`].
pub fn extract_from_html(html: &str) -> PlotResult<Vec<Trace>> {
    let script = find_plot_script(html).ok_or(PlotError::NoPlotScript)?;
    extract_traces(&script)
}
