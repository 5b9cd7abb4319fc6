//! # Banner Data Model
//!
//! The typed values that flow through a banner request: the validated
//! directive coming in, the content extracted from the page, and the result
//! handed back to the caller.

use crate::errors::BannerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

pub const INVALID_URL_MESSAGE: &str = "Invalid URL provided";
pub const INVALID_TEMPLATE_MESSAGE: &str = "Invalid template provided";

/// The design style requested for a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Modern,
    Minimal,
    Gradient,
    Bold,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Minimal,
        Template::Gradient,
        Template::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Minimal => "minimal",
            Template::Gradient => "gradient",
            Template::Bold => "bold",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.as_str() == s)
            .ok_or_else(|| BannerError::InvalidInput(INVALID_TEMPLATE_MESSAGE.to_string()))
    }
}

/// A validated request to generate a banner for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDirective {
    pub url: Url,
    pub template: Template,
}

impl GenerationDirective {
    pub fn new(url: Url, template: Template) -> Self {
        Self { url, template }
    }

    /// Validates raw request input. Only absolute `http`/`https` URLs are accepted.
    pub fn parse(url: &str, template: &str) -> Result<Self, BannerError> {
        let url = Url::parse(url.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
            .ok_or_else(|| BannerError::InvalidInput(INVALID_URL_MESSAGE.to_string()))?;
        let template = template.trim().parse()?;
        Ok(Self::new(url, template))
    }
}

/// Everything learned about a page before generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebDocumentContent {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub main_content_snippet: String,
    pub extracted_colors: Vec<String>,
    /// Host of the page URL without a leading `www.`.
    pub domain: String,
}

/// The response returned for a successful banner request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResult {
    pub title: String,
    pub description: String,
    pub colors: Vec<String>,
    pub keywords: Vec<String>,
    pub svg_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_directive() {
        let directive = GenerationDirective::parse("https://example.com/a", "gradient").unwrap();
        assert_eq!(directive.url.as_str(), "https://example.com/a");
        assert_eq!(directive.template, Template::Gradient);
    }

    #[test]
    fn test_parse_rejects_bad_urls() {
        for url in ["not a url", "ftp://example.com", "mailto:someone@example.com", ""] {
            match GenerationDirective::parse(url, "modern") {
                Err(BannerError::InvalidInput(message)) => assert_eq!(message, INVALID_URL_MESSAGE),
                other => panic!("Expected InvalidInput for '{url}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_template() {
        match GenerationDirective::parse("https://example.com", "retro") {
            Err(BannerError::InvalidInput(message)) => {
                assert_eq!(message, INVALID_TEMPLATE_MESSAGE)
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_result_uses_camel_case() {
        let result = BannerResult {
            title: "t".into(),
            description: "d".into(),
            colors: vec!["#111111".into(), "#222222".into()],
            keywords: vec![],
            svg_content: "<svg></svg>".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["svgContent"], "<svg></svg>");
    }
}
