use sampleapi_api::{app, config::ApiConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sampleapi_observability::init();

    let config = ApiConfig::from_env()?;
    tracing::info!(environment = config.environment.as_str(), "starting sampleapi");

    let app = app::build_sample_app();
    server::serve(&config, app).await?;
    Ok(())
}
