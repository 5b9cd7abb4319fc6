//! # Banner Prompt Templates
//!
//! The instruction sent to the generation provider. Rendering is a pure
//! function of the extracted content and the template, so the same page
//! always produces the same instruction text.

use crate::types::{Template, WebDocumentContent};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 630;
pub const EDGE_MARGIN: u32 = 60;
pub const MAX_DOMINANT_COLORS: usize = 2;

/// The role given to the model for every banner request.
pub const BANNER_SYSTEM_PROMPT: &str = "You are an expert graphic designer who creates promotional web banners as hand-written SVG. You always answer with one complete, well-formed <svg> element and nothing else.";

/// The natural-language style direction for each template.
pub fn template_style(template: Template) -> &'static str {
    match template {
        Template::Modern => "Modern: clean geometric shapes, generous whitespace, soft rounded cards or subtle shadows, and contemporary sans-serif typography with a clear hierarchy.",
        Template::Minimal => "Minimal: a flat single-color background, at most one restrained accent element, lots of negative space, and thin, elegant typography with no decorative clutter.",
        Template::Gradient => "Gradient: a smooth linear or radial gradient blending the dominant colors across the whole canvas, with crisp, high-contrast text layered on top.",
        Template::Bold => "Bold: strong color blocking, oversized heavy headline typography, confident angular or diagonal shapes, and maximum visual impact.",
    }
}

/// Renders the generation instruction for `content` in the given `template`.
pub fn build_banner_prompt(content: &WebDocumentContent, template: Template) -> String {
    let keywords = if content.keywords.is_empty() {
        "none".to_string()
    } else {
        content.keywords.join(", ")
    };
    let color_hint = if content.extracted_colors.is_empty() {
        String::new()
    } else {
        format!(
            "Brand colors found on the site: {}\n",
            content.extracted_colors.join(", ")
        )
    };

    format!(
        r##"Design a promotional banner for the website {domain}.

# WEBSITE
Domain: {domain}
Title: {title}
Description: {description}
Keywords: {keywords}
{color_hint}
# STYLE
{style}

# REQUIREMENTS
1. The root element must be <svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">.
2. Use at most {max_colors} dominant colors, plus black or white for text.
3. Keep all text and important shapes at least {margin} units away from every edge of the canvas.
4. Paraphrase the title and description into a short headline and tagline. Do not copy them verbatim.
5. Show the domain {domain} as a small, unobtrusive label.
6. Return only the SVG markup, with no explanations, comments or Markdown code fences."##,
        domain = content.domain,
        title = content.title,
        description = content.description,
        keywords = keywords,
        color_hint = color_hint,
        style = template_style(template),
        width = CANVAS_WIDTH,
        height = CANVAS_HEIGHT,
        max_colors = MAX_DOMINANT_COLORS,
        margin = EDGE_MARGIN,
    )
}
