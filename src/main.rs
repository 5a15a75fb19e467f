use anyhow::Result;
use clap::Parser;
use powerconv::{config::ConvertConfig, convert_file, logging};
use tracing::info;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init("info");

    // ─── 2) resolve paths ────────────────────────────────────────────
    let cfg = ConvertConfig::parse();
    info!(input = %cfg.input.display(), output = %cfg.output.display(), "startup");

    // ─── 3) convert ──────────────────────────────────────────────────
    let done = convert_file(&cfg.input, &cfg.output)?;

    println!("{}", done);
    Ok(())
}
