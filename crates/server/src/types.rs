//! # API Payloads
//!
//! Request bodies accepted by the HTTP boundary. Fields are optional so that
//! missing values reach the handler and get the uniform 400 response instead
//! of a generic deserialization rejection.

use serde::Deserialize;

pub const MISSING_FIELDS_MESSAGE: &str = "URL and template are required";

#[derive(Debug, Default, Deserialize)]
pub struct GenerateBannerRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

impl GenerateBannerRequest {
    /// Returns both fields when each is present and non-blank.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let template = self
            .template
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((url, template))
    }
}
