//! # Banner Pipeline
//!
//! Runs one banner request from start to finish: fetch the page, extract its
//! content, build the instruction, call the provider, validate the artifact
//! and assemble the result. The two network calls run strictly one after the
//! other and nothing is retried.

use crate::{
    artifact::extract_svg,
    assembler::assemble,
    errors::BannerError,
    extract::extract_content,
    fetcher::PageFetcher,
    prompts::{build_banner_prompt, BANNER_SYSTEM_PROMPT},
    providers::ai::AiProvider,
    types::{BannerResult, GenerationDirective},
};
use bannergen_html::DEFAULT_MAX_COLORS;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// The most colors kept from the page's embedded styles.
    pub max_colors: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
        }
    }
}

/// Generates banners using an injected fetcher and generation provider.
pub struct BannerGenerator<'a> {
    fetcher: &'a dyn PageFetcher,
    ai_provider: &'a dyn AiProvider,
    options: PipelineOptions,
}

impl<'a> BannerGenerator<'a> {
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        ai_provider: &'a dyn AiProvider,
        options: PipelineOptions,
    ) -> Self {
        Self {
            fetcher,
            ai_provider,
            options,
        }
    }

    /// Produces a complete [`BannerResult`] or the first error encountered.
    pub async fn generate(
        &self,
        directive: &GenerationDirective,
    ) -> Result<BannerResult, BannerError> {
        info!(
            "Generating '{}' banner for {}",
            directive.template, directive.url
        );

        let html = self.fetcher.fetch(&directive.url).await?;
        let content = extract_content(&directive.url, &html, self.options.max_colors)?;

        let prompt = build_banner_prompt(&content, directive.template);
        debug!(system_prompt = %BANNER_SYSTEM_PROMPT, user_prompt = %prompt, "--> Sending prompts to AI Provider");

        let raw_response = self
            .ai_provider
            .generate(BANNER_SYSTEM_PROMPT, &prompt)
            .await?;
        debug!("<-- Banner response from AI: {}", raw_response);

        let svg_content = extract_svg(&raw_response)?;
        info!(
            "Banner generated for {} ({} bytes of SVG)",
            content.domain,
            svg_content.len()
        );
        Ok(assemble(content, directive.template, svg_content))
    }
}
