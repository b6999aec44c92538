//! IaC Knowledge - ranked infrastructure-as-code guidance for AI agents.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iac_knowledge::bootstrap::build_registry;
use iac_knowledge::config::{ConfigLoader, KnowledgeConfig};
use iac_knowledge::display;
use iac_knowledge::server::KnowledgeServer;
use iac_knowledge::tools::{RetrievalTool, RetrieveRequest};

#[derive(Parser)]
#[command(
    name = "iac-knowledge",
    about = "Ranked infrastructure-as-code guidance for AI agents",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a config file (defaults to .iac-knowledge.toml, then the user config dir).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available knowledge topics.
    Topics,
    /// Print the knowledge entries for a topic.
    Get {
        /// Topic key.
        topic: String,
        /// Optional free-text query to narrow the results.
        #[arg(short, long)]
        query: Option<String>,
        /// Print the JSON tool response instead of formatted text.
        #[arg(long)]
        json: bool,
    },
    /// Serve the retrieval tool over HTTP.
    Serve {
        /// Host address to bind to.
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<KnowledgeConfig, String> {
    let loader = match path {
        Some(path) if !path.exists() => {
            return Err(format!("Config file not found: {}", path.display()));
        }
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().map_err(|e| e.to_string())
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config)?;
    let registry = build_registry(&config).await.map_err(|e| e.to_string())?;
    let tool = RetrievalTool::new(Arc::new(registry));

    match cli.command {
        Commands::Topics => {
            display::print_topics(&tool.list_topics());
        }
        Commands::Get { topic, query, json } => {
            let request = RetrieveRequest { topic, query };
            match tool.retrieve(&request) {
                Ok(response) if json => {
                    let out = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
                    println!("{out}");
                }
                Ok(response) => display::print_entries(&response),
                Err(error) => {
                    if json {
                        let body = serde_json::to_string_pretty(&error.to_body())
                            .map_err(|e| e.to_string())?;
                        println!("{body}");
                    }
                    return Err(error.to_string());
                }
            }
        }
        Commands::Serve { host, port } => {
            let mut server_config = config.server;
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }

            let cancel = CancellationToken::new();
            let shutdown = cancel.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("Received Ctrl-C");
                        shutdown.cancel();
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to listen for Ctrl-C"),
                }
            });

            KnowledgeServer::new(tool)
                .with_config(server_config)
                .with_cancellation(cancel)
                .run()
                .await
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            display::print_error(&message);
            ExitCode::FAILURE
        }
    }
}
