use thiserror::Error;

/// User-facing summary for failures while fetching or reading the page.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze webpage content";
/// User-facing summary for failures while producing the artifact.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate banner with AI";

/// Failures raised by a generation provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned status {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("AI provider returned an empty response")]
    EmptyResponse,
}

/// Every way a banner request can fail.
#[derive(Error, Debug)]
pub enum BannerError {
    /// Missing or malformed request fields. Raised before any network access.
    #[error("{0}")]
    InvalidInput(String),
    #[error("Timed out after {timeout_secs}s fetching {url}")]
    FetchTimeout { url: String, timeout_secs: u64 },
    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to extract content from {url}: {reason}")]
    Extraction { url: String, reason: String },
    #[error("Generation service failed: {0}")]
    GenerationService(#[from] ProviderError),
    #[error("Generated output did not contain a complete <svg> element")]
    ArtifactFormat,
    #[error("{0}")]
    Configuration(String),
}

impl BannerError {
    /// The generic phrase shown to callers for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            BannerError::InvalidInput(message) | BannerError::Configuration(message) => message,
            BannerError::FetchTimeout { .. }
            | BannerError::UpstreamStatus { .. }
            | BannerError::Transport { .. }
            | BannerError::Extraction { .. } => ANALYSIS_FAILED_MESSAGE,
            BannerError::GenerationService(_) | BannerError::ArtifactFormat => {
                GENERATION_FAILED_MESSAGE
            }
        }
    }

    /// The user-facing phrase followed by the underlying cause, if any.
    pub fn detail(&self) -> String {
        match self {
            BannerError::InvalidInput(message) | BannerError::Configuration(message) => {
                message.clone()
            }
            other => format!("{}: {other}", other.user_message()),
        }
    }
}
