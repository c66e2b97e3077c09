use info_server::{server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    tracing::info!("Info server starting");
    tracing::info!("Port: {}", config.port);
    tracing::info!("Version: {}", config.version);
    if config.simulate_health_failure {
        tracing::info!(
            "Simulated health failure armed (trigger version: {})",
            config.failure_trigger_version
        );
    }

    // Start server
    server::start(config).await?;

    Ok(())
}
