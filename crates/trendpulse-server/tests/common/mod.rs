//! Shared harness for end-to-end tests.
//!
//! Spawns the real router on an ephemeral port with a scripted completion
//! client, so tests exercise the full HTTP surface without any traffic
//! leaving the process.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;

use trendpulse_ai::{CompletionClient, CompletionError, CompletionOptions, Message};
use trendpulse_api::AppStateInner;
use trendpulse_store::Store;

/// Completion double: either fails every call or replays a canned body.
pub enum ScriptedCompletion {
    Unavailable,
    Canned(String),
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        _messages: &[Message],
        _options: &CompletionOptions,
    ) -> Result<String, CompletionError> {
        match self {
            ScriptedCompletion::Unavailable => {
                Err(CompletionError::Connection("scripted outage".to_string()))
            }
            ScriptedCompletion::Canned(body) => Ok(body.clone()),
        }
    }
}

pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Seeded store, completion backend down: the common case under test.
    pub async fn spawn() -> Self {
        Self::spawn_with(
            Store::with_seed_data().unwrap(),
            ScriptedCompletion::Unavailable,
        )
        .await
    }

    /// Empty store, completion backend down.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(Store::new(), ScriptedCompletion::Unavailable).await
    }

    pub async fn spawn_with(store: Store, completion: ScriptedCompletion) -> Self {
        let state = Arc::new(AppStateInner {
            store,
            ai: Arc::new(completion),
            ai_options: CompletionOptions::default(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, trendpulse_api::router(state))
                .await
                .unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
