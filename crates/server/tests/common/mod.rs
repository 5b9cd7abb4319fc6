//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with an injected page
//! fetcher and generation provider, so endpoint tests never leave the machine.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use bannergen::{
    providers::{ai::AiProvider, AiProviderSource},
    FetchOptions, HttpFetcher, PageFetcher, PipelineOptions,
};
use bannergen_server::{router, state::AppState};
use axum::serve;
use reqwest::Client;
use std::{net::SocketAddr, sync::Arc, sync::Once};
use tokio::{net::TcpListener, task::JoinHandle};

pub const EXAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Example</title></head>
<body><p>Hello world and more.</p></body>
</html>"#;

pub const BANNER_SVG: &str = r##"<svg width="1200" height="630" viewBox="0 0 1200 630" xmlns="http://www.w3.org/2000/svg"><rect width="1200" height="630" fill="#DC2626"/><text x="600" y="315">Example</text></svg>"##;

static TRACING: Once = Once::new();

pub fn setup_tracing() {
    TRACING.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// A fetcher that really goes over HTTP, for pages served by `httpmock`.
pub fn http_fetcher() -> Arc<dyn PageFetcher> {
    Arc::new(HttpFetcher::new(FetchOptions::default()).expect("fetcher should build"))
}

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a fixed generation provider.
    pub async fn spawn(
        fetcher: Arc<dyn PageFetcher>,
        ai_provider: impl AiProvider + 'static,
    ) -> Result<Self> {
        let app_state = AppState {
            fetcher,
            ai_provider: AiProviderSource::Static(Box::new(ai_provider)),
            pipeline_options: PipelineOptions::default(),
        };
        Self::spawn_with_state(app_state).await
    }

    pub async fn spawn_with_state(app_state: AppState) -> Result<Self> {
        setup_tracing();

        let app_state_for_harness = app_state.clone();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn banner_url(&self) -> String {
        format!("{}/api/generate-banner", self.address)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
