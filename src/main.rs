use anyhow::Result;
use i18n_site::{config::Config, server::TranslationServer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_site=info".parse()?),
        )
        .init();

    info!("Starting translation server");

    let config = Config::from_env()?;
    TranslationServer::new(config).serve().await
}
