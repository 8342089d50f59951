use dotenvy::dotenv;
use pcge_frontend::config::get_configuration;
use pcge_frontend::observability::init_tracing;
use pcge_frontend::services::accounting_client::AccountingClient;
use pcge_frontend::startup::build_router;
use pcge_frontend::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info,pcge_frontend=debug");

    pcge_frontend::services::metrics::init_metrics();

    let api = Arc::new(AccountingClient::new(&configuration.contabilidad)?);
    let app = build_router(AppState::new(api));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting pcge-frontend on {}", address);
    info!(
        "Accounting API at {}",
        configuration.contabilidad.base_url
    );
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
