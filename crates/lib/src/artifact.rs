//! # Artifact Validation
//!
//! Models rarely answer with bare markup: they wrap it in code fences or add
//! a sentence of commentary. This module pulls the first complete `<svg>`
//! element out of such a response.

use crate::errors::BannerError;
use tracing::warn;

/// Extracts the first balanced `<svg>...</svg>` element from `raw`.
///
/// Tag names match case-insensitively. Nested `<svg>` elements are kept
/// inside their parent and sibling fragments after the first are dropped.
pub fn extract_svg(raw: &str) -> Result<String, BannerError> {
    // ASCII lowercasing keeps byte offsets identical to `raw`.
    let lower = raw.to_ascii_lowercase();
    let mut start = None;
    let mut depth = 0usize;
    let mut cursor = 0;

    while let Some(offset) = lower[cursor..].find('<') {
        let pos = cursor + offset;
        let rest = &lower[pos..];
        let Some(close) = rest.find('>') else {
            break;
        };
        let tag_end = pos + close + 1;

        if is_tag(rest, "<svg") {
            if !lower[..tag_end].ends_with("/>") {
                if start.is_none() {
                    start = Some(pos);
                }
                depth += 1;
            }
            cursor = tag_end;
        } else if is_tag(rest, "</svg") {
            if let Some(begin) = start {
                depth -= 1;
                if depth == 0 {
                    return Ok(raw[begin..tag_end].to_string());
                }
            }
            cursor = tag_end;
        } else {
            cursor = pos + 1;
        }
    }

    warn!("No complete <svg> element found in generated output");
    Err(BannerError::ArtifactFormat)
}

/// True if `rest` starts with the tag `name` followed by a delimiter.
fn is_tag(rest: &str, name: &str) -> bool {
    rest.strip_prefix(name)
        .and_then(|after| after.chars().next())
        .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/')
}
