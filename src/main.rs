use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use adtrail_backend::app;
use adtrail_backend::external::{EmbeddedSource, JsonFileSource, ProfileSource};
use adtrail_backend::logging::{init_logging, LoggingConfig};
use adtrail_backend::state::AppState;
use adtrail_backend::store::UserDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    // Select profile source based on DATASET_SOURCE env var (defaults to embedded)
    let source_name = std::env::var("DATASET_SOURCE").unwrap_or_else(|_| "embedded".to_string());
    let source: Box<dyn ProfileSource> = match source_name.to_lowercase().as_str() {
        "embedded" => {
            info!("📇 Using profile source: embedded sample dataset");
            Box::new(EmbeddedSource)
        }
        "file" => {
            info!("📇 Using profile source: JSON file");
            Box::new(
                JsonFileSource::from_env()
                    .context("Failed to create JsonFileSource (check DATASET_PATH)")?,
            )
        }
        _ => anyhow::bail!(
            "Invalid DATASET_SOURCE: {}. Must be 'embedded' or 'file'",
            source_name
        ),
    };

    let profiles = source
        .load()
        .await
        .with_context(|| format!("Failed to load profiles from '{}' source", source.name()))?;
    let directory = UserDirectory::new(profiles).context("Invalid dataset")?;
    info!(
        "📇 Loaded {} profiles from '{}' source",
        directory.len(),
        source.name()
    );

    let state = AppState {
        directory: Arc::new(directory),
    };
    let app = app::create_app(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("🚀 Attribution backend running at http://{}/", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
