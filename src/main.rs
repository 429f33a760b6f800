use dotenvy::dotenv;
use roster::logging::init_tracing;
use roster::metrics::{init_metrics, metrics_app};
use roster::router::init_router;
use roster::state::init_app_state;
use roster_config::{ObservabilityConfig, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let observability = ObservabilityConfig::from_env();
    init_tracing(&observability)?;

    if let Some(handle) = init_metrics(&observability)? {
        let metrics_addr = format!("0.0.0.0:{}", observability.metrics_port);
        let listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
        info!(address = %metrics_addr, "Metrics listener started");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics listener stopped");
            }
        });
    }

    let state = init_app_state().await?;
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    info!(address = %server.bind_address(), "Server running");
    info!("Scalar UI available at http://{}/scalar", server.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
