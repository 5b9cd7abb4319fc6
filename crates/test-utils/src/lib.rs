//! Shared test doubles for the bannergen workspace.

use async_trait::async_trait;
use bannergen::{providers::ai::AiProvider, BannerError, PageFetcher, ProviderError};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use url::Url;

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiProvider {
    /// A provider that answers every prompt with `response`.
    pub fn new(response: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(Some(response.to_string()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose every call fails like an unreachable service.
    pub fn failing() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ProviderError::AiApi {
                status: 503,
                body: "MockAiProvider: service unavailable".to_string(),
            })
    }
}

// --- Recording Page Fetcher ---

/// Serves canned pages by URL and records every fetch.
#[derive(Clone, Debug, Default)]
pub struct RecordingFetcher {
    pages: Arc<Mutex<HashMap<String, String>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: &str) -> Self {
        let key = Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string());
        self.pages.lock().unwrap().insert(key, html.to_string());
        self
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for RecordingFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, BannerError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| BannerError::UpstreamStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}
