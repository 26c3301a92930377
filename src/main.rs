use anyhow::Result;
use bank_etl::{pipeline, EtlConfig};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bank_etl=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) run the pipeline once ────────────────────────────────────
    let config = EtlConfig::default();
    let client = Client::new();
    let summary = pipeline::run(&client, &config).await?;

    info!(banks = summary.records.len(), "all done");
    Ok(())
}
