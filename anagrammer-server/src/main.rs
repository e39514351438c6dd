use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use anagrammer::{SolverConfig, WordList};

mod app;
use app::{router, AppState};

/// Serves anagram and hint queries over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wordlist file to serve queries against
    #[arg(short = 'f', long, default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// Token separator used when splitting the word list
    #[arg(long, default_value = "\n")]
    delimiter: String,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    // Loaded once for the process lifetime; there is no reload.
    let wordlist = Arc::new(
        WordList::load(&cli.wordlist, &cli.delimiter)
            .with_context(|| format!("failed to read word list {}", cli.wordlist.display()))?,
    );
    info!(
        "Serving {} words from {}",
        wordlist.len(),
        cli.wordlist.display()
    );

    let defaults = Arc::new(SolverConfig {
        wordlist: cli.wordlist.clone(),
        delimiter: cli.delimiter.clone(),
        ..Default::default()
    });

    let app = router(AppState { wordlist, defaults }).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
