//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the page fetcher, the source
//! of generation providers and the pipeline options.

use crate::config::AppConfig;
use bannergen::{
    providers::{AiProviderSource, DEFAULT_API_KEY_ENV},
    FetchOptions, HttpFetcher, PageFetcher, PipelineOptions,
};
use std::{env, sync::Arc, time::Duration};
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    /// Resolved per request so a missing credential surfaces as a request error.
    pub ai_provider: AiProviderSource,
    pub pipeline_options: PipelineOptions,
}

/// Builds the shared application state from the configuration.
///
/// A missing generation credential is only logged here; startup never fails
/// because of it.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let fetcher = HttpFetcher::new(FetchOptions {
        timeout: Duration::from_secs(config.fetch.timeout_secs),
        user_agent: config.fetch.user_agent.clone(),
    })?;

    let key_env = &config.provider.api_key_env;
    let has_key = env::var(key_env).is_ok_and(|key| !key.trim().is_empty());
    if !has_key && config.provider.provider == "gemini" {
        warn!(
            "{} is not set. Banner generation requests will fail until it is provided.",
            key_env
        );
    }
    if key_env != DEFAULT_API_KEY_ENV {
        info!("Reading the generation credential from {}", key_env);
    }

    let pipeline_options = PipelineOptions {
        max_colors: config.extraction.max_colors,
    };

    Ok(AppState {
        fetcher: Arc::new(fetcher),
        ai_provider: AiProviderSource::Configured(config.provider),
        pipeline_options,
    })
}
