//! # bannergen-html: Page Metadata Extraction
//!
//! This crate turns fetched markup into the metadata that describes a page:
//! its title, description, keywords, a short body excerpt and the literal
//! colors declared in its embedded style sheets. Every field is resolved
//! through a fixed fallback chain so callers always receive usable text.

mod colors;

pub use colors::{extract_colors, is_trivial_color, DEFAULT_MAX_COLORS};

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

/// Title used when no source on the page yields any text.
pub const UNTITLED_PAGE: &str = "Untitled Page";
/// Description used when no source on the page yields any text.
pub const NO_DESCRIPTION: &str = "No description available";

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 200;
pub const MAX_SNIPPET_CHARS: usize = 500;
pub const MAX_KEYWORDS: usize = 10;

/// Containers that usually hold the main content of a page, in priority order.
const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    "#content",
    ".content",
    ".main-content",
    ".post-content",
    ".entry-content",
];

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// The textual metadata resolved from a single page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub main_content_snippet: String,
}

/// A parsed, queryable HTML document.
pub struct ParsedPage {
    document: Html,
}

impl ParsedPage {
    /// Parses a full HTML document. Malformed markup is repaired by the parser.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Resolves every metadata field through its fallback chain.
    pub fn metadata(&self) -> Result<PageMetadata, HtmlError> {
        let metadata = PageMetadata {
            title: self.title()?,
            description: self.description()?,
            keywords: self.keywords()?,
            main_content_snippet: self.content_snippet()?,
        };
        debug!(
            title = %metadata.title,
            keywords = metadata.keywords.len(),
            "Resolved page metadata"
        );
        Ok(metadata)
    }

    /// `<title>` → `og:title` → first `<h1>` → [`UNTITLED_PAGE`], capped at 100 chars.
    pub fn title(&self) -> Result<String, HtmlError> {
        let title = match self.first_text("title")? {
            Some(text) => text,
            None => match self.meta_content("meta[property=\"og:title\"]")? {
                Some(text) => text,
                None => self
                    .first_text("h1")?
                    .unwrap_or_else(|| UNTITLED_PAGE.to_string()),
            },
        };
        Ok(truncate_chars(&title, MAX_TITLE_CHARS))
    }

    /// Meta description → `og:description` → first paragraph → [`NO_DESCRIPTION`],
    /// capped at 200 chars.
    pub fn description(&self) -> Result<String, HtmlError> {
        let description = match self.meta_content("meta[name=\"description\"]")? {
            Some(text) => text,
            None => match self.meta_content("meta[property=\"og:description\"]")? {
                Some(text) => text,
                None => self
                    .first_text("p")?
                    .map(|text| truncate_chars(&text, MAX_DESCRIPTION_CHARS))
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            },
        };
        Ok(truncate_chars(&description, MAX_DESCRIPTION_CHARS))
    }

    /// Comma separated entries of the keywords meta tag, trimmed, in source order.
    ///
    /// Duplicates are kept. A page without the tag yields no keywords.
    pub fn keywords(&self) -> Result<Vec<String>, HtmlError> {
        let Some(content) = self.meta_content("meta[name=\"keywords\"]")? else {
            return Ok(Vec::new());
        };
        Ok(content
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .take(MAX_KEYWORDS)
            .map(String::from)
            .collect())
    }

    /// Text of the first main-content container, or of the whole body when no
    /// container exists, capped at 500 chars.
    pub fn content_snippet(&self) -> Result<String, HtmlError> {
        for css in CONTENT_SELECTORS {
            let selector = parse_selector(css)?;
            if let Some(element) = self.document.select(&selector).next() {
                debug!(container = css, "Using content container for snippet");
                return Ok(truncate_chars(&visible_text(element), MAX_SNIPPET_CHARS));
            }
        }
        let body = parse_selector("body")?;
        Ok(self
            .document
            .select(&body)
            .next()
            .map(|element| truncate_chars(&visible_text(element), MAX_SNIPPET_CHARS))
            .unwrap_or_default())
    }

    /// The concatenated contents of every `<style>` element.
    pub fn style_text(&self) -> Result<String, HtmlError> {
        let selector = parse_selector("style")?;
        Ok(self
            .document
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Whitespace-normalized text of the first element matching `css`, if non-empty.
    fn first_text(&self, css: &str) -> Result<Option<String>, HtmlError> {
        let selector = parse_selector(css)?;
        Ok(self
            .document
            .select(&selector)
            .next()
            .map(visible_text)
            .filter(|text| !text.is_empty()))
    }

    /// Trimmed `content` attribute of the first meta tag matching `css`, if non-empty.
    fn meta_content(&self, css: &str) -> Result<Option<String>, HtmlError> {
        let selector = parse_selector(css)?;
        Ok(self
            .document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(String::from))
    }
}

fn parse_selector(css: &str) -> Result<Selector, HtmlError> {
    Selector::parse(css).map_err(|e| HtmlError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Collects the readable text below `element`, skipping scripts and styles,
/// and collapses runs of whitespace into single spaces.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to at most `max` characters, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
