//! Serve command - runs the API server

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::api::create_router_with_state;
use crate::config::AppConfig;
use crate::infrastructure::logging;

const WINDOW_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Run the API server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config);

    let state = crate::create_app_state(&config).await?;
    spawn_window_sweep(state.clone());
    let app = create_router_with_state(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drop expired rate-window entries
fn spawn_window_sweep(state: crate::api::AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(WINDOW_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state.admission.limiter().cleanup().await;
            debug!(removed, "Swept expired rate windows");
        }
    });
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
