use crate::{errors::BannerError, types::WebDocumentContent};
use bannergen_html::{extract_colors, HtmlError, ParsedPage};
use tracing::{debug, info};
use url::Url;

/// Builds the typed page content for `url` from its fetched markup.
///
/// Colors are taken from embedded `<style>` blocks and capped at `max_colors`.
pub fn extract_content(
    url: &Url,
    html: &str,
    max_colors: usize,
) -> Result<WebDocumentContent, BannerError> {
    let page = ParsedPage::parse(html);
    let metadata = page.metadata().map_err(|e| extraction_error(url, e))?;
    let style_text = page.style_text().map_err(|e| extraction_error(url, e))?;
    let extracted_colors = extract_colors(&style_text, max_colors);
    debug!(colors = ?extracted_colors, "Extracted colors from embedded styles");

    let content = WebDocumentContent {
        title: metadata.title,
        description: metadata.description,
        keywords: metadata.keywords,
        main_content_snippet: metadata.main_content_snippet,
        extracted_colors,
        domain: domain_of(url),
    };
    info!(
        "Extracted content for {}: title='{}', {} keywords, {} colors",
        content.domain,
        content.title,
        content.keywords.len(),
        content.extracted_colors.len()
    );
    Ok(content)
}

/// The host of `url` with a leading `www.` removed.
pub fn domain_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

fn extraction_error(url: &Url, err: HtmlError) -> BannerError {
    BannerError::Extraction {
        url: url.to_string(),
        reason: err.to_string(),
    }
}
