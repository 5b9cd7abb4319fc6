//! # Web Page to Banner
//!
//! This crate turns a web page into a promotional banner. It fetches the page,
//! extracts its title, description, keywords and colors, asks a configurable
//! AI provider for an SVG banner in one of four template styles, and returns
//! the validated markup together with the page metadata and a color palette.

pub mod artifact;
pub mod assembler;
pub mod errors;
pub mod extract;
pub mod fetcher;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::{BannerError, ProviderError};
pub use fetcher::{FetchOptions, HttpFetcher, PageFetcher};
pub use pipeline::{BannerGenerator, PipelineOptions};
pub use types::{BannerResult, GenerationDirective, Template, WebDocumentContent};
