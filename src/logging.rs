// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr fmt subscriber; `RUST_LOG` overrides `default_filter`.
pub fn init(default_filter: &str) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
}
