use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};
use tracing::info;

use todosum::api::{self, AppState};
use todosum::clients::gemini::GeminiClient;
use todosum::clients::store::SupabaseStore;
use todosum::clients::webhook::SlackWebhook;
use todosum::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todosum::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let state = Arc::new(AppState {
        store: Arc::new(SupabaseStore::new(
            config.supabase_url.clone(),
            config.supabase_key.clone(),
        )),
        generator: Arc::new(GeminiClient::new(config.gemini_api_key.clone())),
        notifier: Arc::new(SlackWebhook::new(config.slack_webhook_url.clone())),
    });

    let app = api::router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!("Server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
