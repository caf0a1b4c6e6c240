//! Sombrero field API server.
//!
//! Serves a synthetic 1000×1000 float32 field to browser clients.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use field_api::{build_router, metrics, AppState, ServerConfig};

/// Sombrero field API server
#[derive(Parser, Debug)]
#[command(name = "field-api")]
#[command(about = "Serves a synthetic sombrero field as raw float32 bytes")]
struct Args {
    /// Listen address (overrides the config file)
    #[arg(short, long, env = "FIELD_API_LISTEN_ADDR")]
    listen: Option<String>,

    /// YAML configuration file
    #[arg(short, long, env = "FIELD_API_CONFIG")]
    config: Option<PathBuf>,

    /// Allowed CORS origin; repeat or comma-separate for several
    #[arg(long = "cors-origin", env = "FIELD_API_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "FIELD_API_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting field API server");

    let config = ServerConfig::load(args.config.as_deref())?
        .with_listen(args.listen)
        .with_cors_origins(args.cors_origins);
    let addr = config.listen_addr()?;

    info!(
        origins = ?config.cors.allowed_origins,
        credentials = config.cors.allow_credentials,
        "CORS policy"
    );

    let prometheus = metrics::install_prometheus()?;
    info!("Prometheus metrics exporter initialized");

    let state = Arc::new(AppState::new(config).with_prometheus(prometheus));
    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
