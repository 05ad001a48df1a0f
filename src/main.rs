//! Binary entrypoint: one generation run, then exit.
//! Non-zero status on fetch or shape failure; nothing is written in that case.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stream_seo_generator::config::SiteConfig;
use stream_seo_generator::fetch::HttpCatalogueSource;
use stream_seo_generator::pipeline;
use stream_seo_generator::write::FsSink;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = match SiteConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = ?e, "invalid site config");
            std::process::exit(1);
        }
    };

    let source = match HttpCatalogueSource::new(&cfg.source_url, cfg.fetch_timeout_secs) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = ?e, "http client setup failed");
            std::process::exit(1);
        }
    };
    let sink = FsSink::new(".");

    if let Err(e) = pipeline::run(&cfg, &source, &sink).await {
        tracing::error!(error = ?e, "metadata generation failed");
        std::process::exit(1);
    }
}
