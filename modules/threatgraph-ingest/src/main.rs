use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use otx_client::OtxClient;
use threatgraph_common::{Config, ThreatGraphError};
use threatgraph_graph::{migrate::migrate, GraphClient};
use threatgraph_ingest::{traits::GraphSink, WriteMode};

#[derive(Parser)]
#[command(
    name = "threatgraph-ingest",
    about = "Load subscribed OTX pulses into Neo4j as Indicator/Report nodes"
)]
struct Cli {
    /// Write each pulse's indicators in one transaction instead of one per indicator
    #[arg(long)]
    batch_per_pulse: bool,

    /// Don't create uniqueness constraints before loading
    #[arg(long)]
    skip_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("threatgraph=info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.log_redacted();

    let otx = OtxClient::with_base_url(&config.otx_base_url, config.otx_api_key.clone())?;

    let mode = if cli.batch_per_pulse {
        WriteMode::PerPulse
    } else {
        WriteMode::PerIndicator
    };

    let skip_migrate = cli.skip_migrate;
    let connect = || async move {
        let client =
            GraphClient::connect(&config.neo4j_uri, &config.neo4j_user, &config.neo4j_password)
                .await?;
        if !skip_migrate {
            migrate(&client).await?;
        }
        Ok::<_, ThreatGraphError>(GraphSink::new(client))
    };

    let report = threatgraph_ingest::run(&otx, connect, mode).await?;
    info!(
        pulses = report.pulses,
        written = report.written,
        skipped = report.skipped,
        fetch_failed = report.fetch_failed,
        "Run finished"
    );

    Ok(())
}
