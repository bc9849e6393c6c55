use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use trendpulse_ai::{CompletionClient, CompletionOptions, OpenAiClient};
use trendpulse_api::AppStateInner;
use trendpulse_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendpulse=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("TRENDPULSE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("TRENDPULSE_PORT")
        .unwrap_or_else(|_| "3001".into())
        .parse()?;
    let api_key = std::env::var("OPENAI_API_KEY").ok();
    let ai_base_url = std::env::var("TRENDPULSE_AI_BASE_URL")
        .unwrap_or_else(|_| "https://api.openai.com/v1".into());
    let ai_model =
        std::env::var("TRENDPULSE_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
    let ai_timeout_secs: u64 = std::env::var("TRENDPULSE_AI_TIMEOUT_SECS")
        .unwrap_or_else(|_| "30".into())
        .parse()?;

    if api_key.is_none() {
        info!("OPENAI_API_KEY not set, AI endpoints will serve fallback content");
    }

    // Shared state
    let store = Store::with_seed_data()?;
    let ai: Arc<dyn CompletionClient> = Arc::new(OpenAiClient::new(ai_base_url, ai_model, api_key));
    let ai_options = CompletionOptions {
        timeout: Duration::from_secs(ai_timeout_secs),
        ..CompletionOptions::default()
    };

    let state = Arc::new(AppStateInner {
        store,
        ai,
        ai_options,
    });

    let app = trendpulse_api::router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("TrendPulse server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
