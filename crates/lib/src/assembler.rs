use crate::types::{BannerResult, Template, WebDocumentContent};

/// The two-color palette used when a page declares no usable colors.
pub fn default_palette(template: Template) -> [&'static str; 2] {
    match template {
        Template::Modern => ["#3B82F6", "#8B5CF6"],
        Template::Minimal => ["#111827", "#E5E7EB"],
        Template::Gradient => ["#F97316", "#EC4899"],
        Template::Bold => ["#DC2626", "#FACC15"],
    }
}

/// Resolves the banner palette: extracted colors fill the slots in order and
/// the template default fills whatever is left. Always two entries.
pub fn resolve_palette(extracted: &[String], template: Template) -> Vec<String> {
    let mut palette = default_palette(template).map(String::from).to_vec();
    for (slot, color) in palette.iter_mut().zip(extracted) {
        slot.clone_from(color);
    }
    palette
}

/// Merges page content, the resolved palette and the validated artifact.
pub fn assemble(content: WebDocumentContent, template: Template, svg_content: String) -> BannerResult {
    let colors = resolve_palette(&content.extracted_colors, template);
    BannerResult {
        title: content.title,
        description: content.description,
        colors,
        keywords: content.keywords,
        svg_content,
    }
}
