use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use careercoach::app::event_loop::{self, Services};
use careercoach::extract::PdfExtractor;
use careercoach::llm::RelayClient;
use careercoach::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "careercoach", version, about = "AI career feedback in the terminal")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model relay endpoint, overrides the config file
    #[arg(long)]
    relay_url: Option<String>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.relay_url {
        config.relay.url = url;
    }

    let _guard = setup_logging(&config, cli.debug)?;

    info!(relay = %config.relay.url, "careercoach starting");

    let client = RelayClient::new(
        &config.relay.url,
        config.relay.timeout(),
        config.relay.max_retries,
    )?;

    let services = Services {
        model: Arc::new(client),
        extractor: Arc::new(PdfExtractor),
    };

    event_loop::run(config, services).await
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "careercoach.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("careercoach=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
