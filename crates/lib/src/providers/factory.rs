//! # AI Provider Factory
//!
//! Builds generation providers from settings. The credential is never stored
//! in the settings: it is read from the process environment each time a
//! provider is built, so a server can start without it and report the gap
//! per request instead.

use crate::{
    errors::BannerError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use serde::Deserialize;
use std::env;
use tracing::info;

pub const DEFAULT_API_KEY_ENV: &str = "AI_API_KEY";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Settings for building a generation provider.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderSettings {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The environment variable that holds the credential.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_model_name() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key_env: default_api_key_env(),
            model_name: default_model_name(),
        }
    }
}

/// Creates a provider from `settings`, reading the credential from the environment.
///
/// Gemini requires the credential; local providers use it as a bearer token
/// when present. Nothing here touches the network.
pub fn create_provider(settings: &ProviderSettings) -> Result<Box<dyn AiProvider>, BannerError> {
    let api_key = env::var(&settings.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty());

    let provider: Box<dyn AiProvider> = match settings.provider.as_str() {
        "gemini" => {
            let api_key = api_key.ok_or_else(|| {
                BannerError::Configuration(format!(
                    "{} environment variable is not set. It is required for the gemini provider.",
                    settings.api_key_env
                ))
            })?;
            let api_url = settings
                .api_url
                .clone()
                .unwrap_or_else(|| GeminiProvider::endpoint_for(&settings.model_name));
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = settings.api_url.clone().ok_or_else(|| {
                BannerError::Configuration(
                    "api_url is required for the local provider.".to_string(),
                )
            })?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                Some(settings.model_name.clone()),
            )?)
        }
        other => {
            return Err(BannerError::Configuration(format!(
                "Unsupported AI provider type '{other}'"
            )))
        }
    };
    Ok(provider)
}

/// Where a request gets its generation provider from.
#[derive(Debug, Clone)]
pub enum AiProviderSource {
    /// Build a fresh provider from settings and the environment on every request.
    Configured(ProviderSettings),
    /// Always hand out clones of an already built provider.
    Static(Box<dyn AiProvider>),
}

impl AiProviderSource {
    pub fn resolve(&self) -> Result<Box<dyn AiProvider>, BannerError> {
        match self {
            AiProviderSource::Configured(settings) => create_provider(settings),
            AiProviderSource::Static(provider) => Ok(provider.clone()),
        }
    }
}
