// Modules
pub mod ai;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod server;
pub mod session;

use ai::GeminiClient;
use anyhow::Context;
use catalog::Catalog;
use commands::AppState;
use config::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("promptlab_lib=info,promptlab=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the app state from configuration
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let catalog = Catalog::embedded().context("Embedded catalog failed validation")?;
    let summary = catalog.summary();
    info!(
        version = summary.version,
        genres = summary.genre_count,
        prompts = summary.total_prompt_count,
        "Catalog loaded"
    );

    let generator = GeminiClient::new(config.gemini()).context("Failed to create Gemini client")?;
    let clipboard = config
        .clipboard()
        .context("Invalid clipboard command")?;

    if config.api_key.is_none() {
        info!("No GEMINI_API_KEY set, AI generation requests will fail remotely");
    }

    Ok(Arc::new(AppState::new(catalog, Arc::new(generator), clipboard)))
}

/// Run the local server until Ctrl-C
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = build_state(&config)?;

    let running = server::start_server(config.host, config.port, state, config.frontend_dir.clone())
        .await
        .context("Failed to start server")?;
    info!("Prompt Lab ready at http://{}", running.addr);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    running.shutdown().await;
    Ok(())
}
