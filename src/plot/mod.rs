// src/plot/mod.rs
//
// Recovers the series behind a Plotly chart embedded in an HTML page.

pub mod extract;
pub mod fetch;

pub use extract::{extract_from_html, extract_traces, find_plot_script, Trace};
pub use fetch::fetch_page;
