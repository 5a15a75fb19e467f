// src/config.rs

use clap::{Args, Parser};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_INPUT: &str = "power_consumption_records.csv";
pub const DEFAULT_OUTPUT: &str = "power_consumption_records.json";

/// Convert a CSV file of power-consumption records into a JSON array.
#[derive(Debug, Clone, Parser)]
#[command(name = "powerconv", version)]
pub struct ConvertConfig {
    /// CSV file to read; first line is the header
    #[arg(short, long, env = "POWERCONV_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON file to create or overwrite
    #[arg(short, long, env = "POWERCONV_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Print the series behind a Plotly chart embedded in a web page.
#[derive(Debug, Clone, Parser)]
#[command(name = "extract_plot", version)]
pub struct PlotConfig {
    #[command(flatten)]
    pub source: PlotSource,
}

/// Where the page comes from; `--file` wins when both are given.
#[derive(Debug, Clone, Args)]
pub struct PlotSource {
    /// Page to fetch
    #[arg(env = "PLOT_URL", required_unless_present = "file")]
    pub url: Option<Url>,

    /// Read a saved page instead of fetching
    #[arg(long)]
    pub file: Option<PathBuf>,
}
