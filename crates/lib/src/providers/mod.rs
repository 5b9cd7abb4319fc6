pub mod ai;
pub mod factory;

pub use factory::{create_provider, AiProviderSource, ProviderSettings, DEFAULT_API_KEY_ENV};
