use endoreels_api::config::ApiConfig;
use endoreels_api::services::init_metrics;
use endoreels_api::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (and .env) - fail fast if invalid
    let config = ApiConfig::from_env().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting EndoReels API"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("EndoReels API stopped");
    Ok(())
}
