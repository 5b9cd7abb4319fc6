use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// The number of colors kept when the caller does not configure a cap.
pub const DEFAULT_MAX_COLORS: usize = 5;

const TRIVIAL_HEX: &[&str] = &["#000", "#000000", "#fff", "#ffffff"];

/// Hex literals of 6 or 3 digits, or functional `rgb()`/`rgba()` notation.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#(?:[0-9a-f]{6}|[0-9a-f]{3})\b|rgba?\([^)]*\)").expect("valid color pattern")
});

/// Scans style text for color literals.
///
/// Hex literals keep their original spelling. Functional notation is rebuilt
/// from its components as `rgb(r, g, b)` or `rgba(r, g, b, a)`, whether the
/// source separated them with commas, spaces or a slash; literals that do not
/// have three or four components are skipped. The result is deduplicated by
/// first occurrence ignoring case, stripped of pure black and white, and
/// capped at `max_colors`. No matches is a normal, empty result.
pub fn extract_colors(style_text: &str, max_colors: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    COLOR_RE
        .find_iter(style_text)
        .filter_map(|m| normalize(m.as_str()))
        .filter(|color| seen.insert(color.to_ascii_lowercase()))
        .filter(|color| !is_trivial_color(color))
        .take(max_colors)
        .collect()
}

/// True for pure black or white, compared by value.
///
/// Functional colors count as trivial when all three channels are 0 or all
/// are 255 and the alpha is absent or fully opaque (`1`, `1.0`, `100%`).
pub fn is_trivial_color(color: &str) -> bool {
    let color = color.trim();
    if color.starts_with('#') {
        return TRIVIAL_HEX.contains(&color.to_ascii_lowercase().as_str());
    }
    let Some((_, components)) = functional_parts(color) else {
        return false;
    };
    let Some(channels) = components[..3]
        .iter()
        .map(|c| channel_value(c))
        .collect::<Option<Vec<f64>>>()
    else {
        return false;
    };
    let opaque = components
        .get(3)
        .map_or(true, |alpha| alpha_value(alpha).is_some_and(|a| a == 1.0));
    let all = |v: f64| channels.iter().all(|c| *c == v);
    opaque && (all(0.0) || all(255.0))
}

fn normalize(literal: &str) -> Option<String> {
    if literal.starts_with('#') {
        return Some(literal.to_string());
    }
    let (name, components) = functional_parts(literal)?;
    Some(format!("{name}({})", components.join(", ")))
}

/// Splits `rgb(...)`/`rgba(...)` into its lowercased name and 3 or 4 components.
fn functional_parts(literal: &str) -> Option<(String, Vec<String>)> {
    let lower = literal.to_ascii_lowercase();
    let (name, rest) = lower.split_once('(')?;
    let name = name.trim();
    if name != "rgb" && name != "rgba" {
        return None;
    }
    let inner = rest.strip_suffix(')')?;
    let components: Vec<String> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();
    matches!(components.len(), 3 | 4).then(|| (name.to_string(), components))
}

fn channel_value(component: &str) -> Option<f64> {
    match component.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok().map(|p| p * 255.0 / 100.0),
        None => component.parse().ok(),
    }
}

fn alpha_value(component: &str) -> Option<f64> {
    match component.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok().map(|p| p / 100.0),
        None => component.parse().ok(),
    }
}
