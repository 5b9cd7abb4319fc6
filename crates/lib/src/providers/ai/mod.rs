pub mod gemini;
pub mod local;

use crate::errors::ProviderError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for text generation across different
/// Large Language Models (e.g., Gemini, local OpenAI-compatible servers).
/// Output is not deterministic; callers validate whatever comes back.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ProviderError>;
}

dyn_clone::clone_trait_object!(AiProvider);
