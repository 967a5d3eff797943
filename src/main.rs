use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sourcer::cli::{chat, health, ingest, status, wipe};
use sourcer::config::Config;
use sourcer::gateway::BackendGateway;

#[derive(Parser)]
#[command(name = "sourcer")]
#[command(about = "AI recruiter assistant for a session-scoped RAG backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "sourcer.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the recruiter assistant
    Chat {
        /// One-shot question; omit for an interactive session
        question: Option<String>,

        /// Wipe the backend session when the chat ends (best-effort)
        #[arg(long)]
        wipe_on_exit: bool,
    },

    /// Ingest candidate documents into the session
    Ingest {
        #[command(subcommand)]
        command: IngestCommands,
    },

    /// Show whether the session holds any ingested data
    Status,

    /// Wipe all data stored for this session
    Wipe {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Check backend reachability
    Health,
}

#[derive(Subcommand)]
enum IngestCommands {
    /// Upload a .pdf/.txt document or a .zip bundle
    File {
        /// Path to the document or archive
        path: PathBuf,
    },
    /// Ingest raw text
    Text {
        /// Text to ingest
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config)?;

    // Initialize backend gateway
    let gateway = BackendGateway::new(&config)?;

    match cli.command {
        Commands::Chat {
            question,
            wipe_on_exit,
        } => {
            chat::run(&config, &gateway, question, wipe_on_exit).await?;
        }
        Commands::Ingest { command } => match command {
            IngestCommands::File { path } => {
                ingest::file(&config, &gateway, &path).await?;
            }
            IngestCommands::Text { text } => {
                ingest::text(&config, &gateway, &text).await?;
            }
        },
        Commands::Status => {
            status::run(&config, &gateway).await?;
        }
        Commands::Wipe { yes } => {
            wipe::run(&config, &gateway, yes).await?;
        }
        Commands::Health => {
            health::run(&gateway).await?;
        }
    }

    Ok(())
}
