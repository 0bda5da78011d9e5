use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voxbridge_client::EndpointClient;
use voxbridge_core::{EndpointConfig, EnvFile};

#[derive(Parser)]
#[command(name = "voxbridge", about = "Audio transcription via a managed inference endpoint")]
struct Cli {
    /// Path to the optional KEY=VALUE environment file
    #[arg(short, long, default_value = "config.env")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe an audio file and print the text
    Transcribe { audio: PathBuf },
    /// Check whether the remote endpoint is in service
    Status,
    /// Print the local endpoint configuration
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("voxbridge starting");

    let env_file = EnvFile::load(&cli.config)
        .with_context(|| format!("failed to load config from {:?}", cli.config))?;
    // Merging into the process environment is this binary's call, not the
    // loader's; the AWS SDK credential chain reads from here.
    env_file.apply_to_env();

    let config = EndpointConfig::from_env().context("invalid endpoint configuration")?;
    let client = EndpointClient::connect(config).await;

    match cli.command {
        Command::Transcribe { audio } => {
            let text = client
                .transcribe_audio(&audio)
                .await
                .with_context(|| format!("failed to transcribe {audio:?}"))?;
            println!("{text}");
        }
        Command::Status => {
            let (in_service, message) = client.describe_status().await;
            println!("{message}");
            if !in_service {
                std::process::exit(1);
            }
        }
        Command::Info => {
            let info = client.endpoint_info();
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
