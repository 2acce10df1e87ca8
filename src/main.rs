use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use credbot_gateway::{ApiServer, Config, GeminiCompletion, WhisperTranscriber};

/// Credbot - help-chat voice assistant backend for IITGN-Cred
#[derive(Parser)]
#[command(name = "credbot", version, about)]
struct Cli {
    /// Port to listen on (overrides CREDBOT_PORT/PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,credbot_gateway=info",
        1 => "info,credbot_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!(
        port = config.server.port,
        stt_model = %config.stt.model,
        llm_model = %config.llm.model,
        "starting credbot gateway"
    );

    let stt = Arc::new(WhisperTranscriber::new(&config.stt)?);
    let llm = Arc::new(GeminiCompletion::new(&config.llm)?);

    ApiServer::new(stt, llm, config.server.port).run().await?;

    Ok(())
}
