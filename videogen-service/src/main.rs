use service_core::observability::init_tracing;
use videogen_service::config::VideogenConfig;
use videogen_service::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = VideogenConfig::load()?;

    init_tracing(
        "videogen-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
