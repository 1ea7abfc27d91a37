use records_service::config::{RecordsConfig, SERVICE_NAME};
use records_service::services::init_metrics;
use records_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = RecordsConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    // Must be installed before any metric is recorded.
    init_metrics();

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        database = %config.mongodb.database,
        "Starting records service"
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
