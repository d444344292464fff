//! Invite Mailer web server.
//!
//! Receives invitation requests, sends the invitation email through Resend
//! and replies with `{success, message}` or `{error}`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use invite_mailer::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("invite_mailer_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        resend_api_url = %config.resend_api_url,
        resend_api_key_configured = config.resend_api_key.is_some(),
        email_from = %config.email_from,
        email_from_from_env = config.email_from_from_env,
        app_url = %config.app_url,
        database_configured = config.database.is_configured(),
        "config_loaded"
    );

    if config.resend_api_key.is_none() {
        warn!("resend_api_key_not_configured");
    }

    let port = config.port;
    let app = create_router(AppState::new(config));

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "invite_mailer_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("invite_mailer_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("invite_mailer_shutting_down");
}
