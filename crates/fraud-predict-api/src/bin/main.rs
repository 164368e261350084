//! Fraud Predict entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use fraud_predict_api::{
    classify_payload, create_router, init_tracing, AppState, ExitCode, LogFormat, ServerConfig,
};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fraud-predict")]
#[command(about = "Threshold-based transaction fraud prediction service")]
#[command(version)]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value = "json", env = "LOG_FORMAT", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000", env = "PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Maximum request body size in bytes
        #[arg(long, default_value = "1048576")]
        max_body_bytes: usize,

        /// Per-request timeout in milliseconds
        #[arg(long, default_value = "30000")]
        timeout_ms: u64,
    },

    /// Classify one JSON payload from a file or stdin
    Classify {
        /// Path to payload file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Serve {
            port,
            host,
            max_body_bytes,
            timeout_ms,
        } => {
            let config = ServerConfig {
                host,
                port,
                max_body_bytes,
                timeout_ms,
            };
            serve(config).await?;
        }

        Commands::Classify { file } => {
            let body = match &file {
                Some(path) => std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = Vec::new();
                    std::io::stdin()
                        .read_to_end(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };

            let outcome = classify_payload(&body)?;
            println!("{}", outcome.output);
            if outcome.exit_code != ExitCode::Success {
                std::process::exit(outcome.exit_code.into());
            }
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Starting fraud prediction service on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Fraud prediction service stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
