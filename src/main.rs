use anyhow::{Context, Result};
use chrono::Local;
use mppraha_opendata::{changelog, run, PipelineConfig};
use reqwest::blocking::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) download, convert, write ─────────────────────────────────
    let config = PipelineConfig::default();
    let client = Client::new();
    let summary = run(&client, &config)
        .with_context(|| format!("converting {}", config.source_url))?;
    info!(
        flattened = summary.flattened,
        written = summary.written,
        "done"
    );

    // ─── 3) stamp the changelog (best effort) ────────────────────────
    changelog::touch_changelog(&config.changelog_path, Local::now().date_naive());

    Ok(())
}
