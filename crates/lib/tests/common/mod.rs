#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as mock providers
//! and page fixtures, to ensure tests are isolated and repeatable.

use async_trait::async_trait;
use bannergen::{providers::ai::AiProvider, ProviderError};
use dotenvy::dotenv;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// Replays queued responses in order and records every call.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<Result<String, u16>>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// `Err(status)` entries are returned as provider API failures.
    pub fn with_results(results: Vec<Result<String, u16>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(results.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match self.responses.write().unwrap().pop() {
            Some(Ok(response)) => Ok(response),
            Some(Err(status)) => Err(ProviderError::AiApi {
                status,
                body: "mock failure".to_string(),
            }),
            None => Err(ProviderError::EmptyResponse),
        }
    }
}

// --- Fixtures ---

pub const EXAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Example</title></head>
<body><p>Hello world and more.</p></body>
</html>"#;

pub const BANNER_SVG: &str = r#"<svg width="1200" height="630" viewBox="0 0 1200 630" xmlns="http://www.w3.org/2000/svg"><rect width="1200" height="630" fill="red"/><text x="60" y="120">Example</text></svg>"#;
