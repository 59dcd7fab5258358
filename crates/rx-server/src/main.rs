use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rx_server::config::{config_path, ConfigSource, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,rx_server=debug")),
        )
        .init();

    info!("RxOS starting...");

    let path = config_path();
    let (config, source) = ServerConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    match source {
        ConfigSource::File => info!(path = %path.display(), "Config loaded"),
        ConfigSource::Defaults => {
            info!("No config file found at {}, using defaults", path.display())
        }
    }

    info!(
        listen = format!("{}:{}", config.listen_address, config.port),
        site_root = config.site_root,
        "Serving site"
    );

    rx_server::serve(config).await.context("Server failed")?;
    Ok(())
}
