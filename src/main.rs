use std::sync::Arc;

use doku_checkout::adapters::{notification_router, LoggingNotificationSink, NotificationAppState};
use doku_checkout::application::DokuPaymentClient;
use doku_checkout::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (also reads .env)
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    tracing::info!("Starting DOKU checkout notification server");
    tracing::info!(
        client_id = %config.payment.client_id,
        environment = ?config.payment.environment(),
        "Payment gateway configured"
    );

    let client = DokuPaymentClient::from_config(&config.payment)?;
    let state = NotificationAppState::new(
        Arc::new(client),
        Arc::new(LoggingNotificationSink::new()),
        config.server.notification_path.clone(),
    );
    let app = notification_router(state);

    let addr = config.server.socket_addr()?;
    tracing::info!(
        "Listening for notifications on {}{}",
        addr,
        config.server.notification_path
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured level. `DOKU_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let json = std::env::var("DOKU_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
