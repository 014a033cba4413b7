use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, routing::get, routing::post};
use tokio::net::TcpListener;
use tower_http::decompression::RequestDecompressionLayer;
use tracing::info;

use super::{
    services::{health, print_ticket},
    state::AppState,
};
use crate::config::Config;
use crate::printer::PrintInvoker;
use crate::sequence::TicketSequencer;
use crate::templates::TemplateStore;
use crate::ticket_log::TicketLog;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the service router. Shared between `run` and the integration
/// tests, which drive it directly without a listener.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/print", post(print_ticket))
        .route("/health", get(health))
        .with_state(state)
        // Automatically decompress gzip request bodies at the middleware
        // level, so clients may compress large task text.
        .layer(RequestDecompressionLayer::new())
}

/// Load configuration, wire up the components, and serve until shutdown.
///
/// `address` overrides the configured bind address when given (CLI flag).
pub async fn run(address: Option<SocketAddr>) -> Result<(), AnyError> {
    info!("Loading configuration");
    let config = Config::load().map_err(|e| format!("Failed to load config: {}", e))?;

    let address = address.unwrap_or(config.server.bind_addr);

    // Durable state lives under configurable paths; make sure their
    // parent directories exist before first use.
    for path in [&config.state.counter_path, &config.state.ticket_log_path] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
    }

    let templates = TemplateStore::load(&config.templates.settings_path);
    let sequencer = TicketSequencer::new(&config.state.counter_path);
    let ticket_log = TicketLog::new(&config.state.ticket_log_path);
    let printer = PrintInvoker::new(
        &config.print.script_path,
        Duration::from_secs(config.print.timeout_secs),
    );

    info!(
        script = %config.print.script_path.display(),
        counter = %config.state.counter_path.display(),
        "Ticketpress components initialized"
    );

    let state = AppState::new(config, templates, sequencer, ticket_log, printer);
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Ticketpress API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
