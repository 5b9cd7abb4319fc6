//! # Page Fetching
//!
//! Retrieves the raw markup of a page. Each call makes exactly one attempt,
//! bounded by a timeout, and sends a desktop browser `User-Agent`.

use crate::errors::BannerError;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// A source of page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync + Debug {
    /// Returns the document text served at `url`.
    async fn fetch(&self, url: &Url) -> Result<String, BannerError>;
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches pages over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, BannerError> {
        let client = ReqwestClient::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .build()
            .map_err(|e| BannerError::Configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    fn timeout_error(&self, url: &Url) -> BannerError {
        BannerError::FetchTimeout {
            url: url.to_string(),
            timeout_secs: self.timeout.as_secs(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, BannerError> {
        info!("Fetching page content from: {url}");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.timeout_error(url)
                } else {
                    BannerError::Transport {
                        url: url.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {url} failed with status {status}");
            return Err(BannerError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error(url)
            } else {
                BannerError::Extraction {
                    url: url.to_string(),
                    reason: format!("Failed to decode response body: {e}"),
                }
            }
        })
    }
}
