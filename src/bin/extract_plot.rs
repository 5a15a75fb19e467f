// src/bin/extract_plot.rs

use anyhow::{Context, Result};
use clap::Parser;
use powerconv::{
    config::PlotConfig,
    logging,
    plot::{extract_from_html, fetch_page},
};
use reqwest::Client;
use std::fs;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("info");
    let cfg = PlotConfig::parse();

    // 1) page text, from disk or over HTTP
    let html = match (&cfg.source.file, &cfg.source.url) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("reading saved page {}", path.display()))?,
        (None, Some(url)) => {
            info!(%url, "fetching");
            fetch_page(&Client::new(), url).await?
        }
        (None, None) => anyhow::bail!("either a URL or --file is required"),
    };

    // 2) locate the chart and decode its traces
    let traces = extract_from_html(&html)?;
    info!(traces = traces.len(), "found Plotly chart script");

    // 3) print each series
    for trace in &traces {
        println!();
        println!("Trace Name: {}", trace.label());
        println!("Timestamps: {}", trace.x);
        println!("Temperatures: {}", trace.y);
    }

    Ok(())
}
