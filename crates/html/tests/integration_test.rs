//! # HTML Crate Integration Tests
//!
//! This file contains integration tests for the `bannergen-html` crate, verifying
//! the metadata fallback chains and the color scanning of embedded style sheets.

#[cfg(test)]
mod tests {
    use bannergen_html::{extract_colors, ParsedPage, NO_DESCRIPTION, UNTITLED_PAGE};

    #[test]
    fn test_title_prefers_title_element() {
        let page = ParsedPage::parse(
            r#"<html><head><title> Real Title </title>
            <meta property="og:title" content="OG Title"></head>
            <body><h1>Heading</h1></body></html>"#,
        );
        assert_eq!(page.title().unwrap(), "Real Title");
    }

    #[test]
    fn test_title_falls_back_to_og_title() {
        let page = ParsedPage::parse(
            r#"<html><head><meta property="og:title" content="  Shared Title  "></head>
            <body><h1>Heading</h1></body></html>"#,
        );
        assert_eq!(page.title().unwrap(), "Shared Title");
    }

    #[test]
    fn test_title_falls_back_to_first_heading() {
        let page = ParsedPage::parse(
            "<html><body><h1>First <em>Heading</em></h1><h1>Second</h1></body></html>",
        );
        assert_eq!(page.title().unwrap(), "First Heading");
    }

    #[test]
    fn test_title_sentinel_when_no_source() {
        let page = ParsedPage::parse("<html><head><title>   </title></head><body></body></html>");
        assert_eq!(page.title().unwrap(), UNTITLED_PAGE);
    }

    #[test]
    fn test_title_is_capped_after_fallback() {
        let long_heading = "x".repeat(150);
        let page = ParsedPage::parse(&format!("<html><body><h1>{long_heading}</h1></body></html>"));
        assert_eq!(page.title().unwrap().chars().count(), 100);
    }

    #[test]
    fn test_description_chain() {
        let both = ParsedPage::parse(
            r#"<html><head>
            <meta name="description" content="Meta description">
            <meta property="og:description" content="OG description">
            </head><body><p>Paragraph</p></body></html>"#,
        );
        assert_eq!(both.description().unwrap(), "Meta description");

        let og_only = ParsedPage::parse(
            r#"<html><head><meta property="og:description" content="OG description"></head>
            <body><p>Paragraph</p></body></html>"#,
        );
        assert_eq!(og_only.description().unwrap(), "OG description");

        let paragraph_only = ParsedPage::parse(
            "<html><body><div>noise</div><p>Hello   world\n and more.</p><p>Second</p></body></html>",
        );
        assert_eq!(paragraph_only.description().unwrap(), "Hello world and more.");

        let nothing = ParsedPage::parse("<html><body><div>no paragraphs</div></body></html>");
        assert_eq!(nothing.description().unwrap(), NO_DESCRIPTION);
    }

    #[test]
    fn test_description_paragraph_is_truncated() {
        let paragraph = "word ".repeat(100);
        let page = ParsedPage::parse(&format!("<html><body><p>{paragraph}</p></body></html>"));
        let description = page.description().unwrap();
        assert_eq!(description.chars().count(), 200);
        assert!(description.starts_with("word word"));
    }

    #[test]
    fn test_keywords_keep_duplicates_and_order() {
        let page = ParsedPage::parse(
            r#"<html><head><meta name="keywords" content="ai, tools, ai"></head></html>"#,
        );
        assert_eq!(page.keywords().unwrap(), vec!["ai", "tools", "ai"]);
    }

    #[test]
    fn test_keywords_skip_blank_entries() {
        let page = ParsedPage::parse(
            r#"<html><head><meta name="keywords" content="a,, b , ,c,"></head></html>"#,
        );
        assert_eq!(page.keywords().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keywords_absent_and_capped() {
        let page = ParsedPage::parse("<html><head></head><body></body></html>");
        assert!(page.keywords().unwrap().is_empty());

        let many = (0..15).map(|i| format!("k{i}")).collect::<Vec<_>>().join(",");
        let page = ParsedPage::parse(&format!(
            r#"<html><head><meta name="keywords" content="{many}"></head></html>"#
        ));
        let keywords = page.keywords().unwrap();
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "k0");
        assert_eq!(keywords[9], "k9");
    }

    #[test]
    fn test_snippet_prefers_main_container() {
        let page = ParsedPage::parse(
            "<html><body><nav>Menu</nav><article>Article text</article><main>Main text</main></body></html>",
        );
        assert_eq!(page.content_snippet().unwrap(), "Main text");
    }

    #[test]
    fn test_snippet_falls_back_to_body_without_scripts() {
        let page = ParsedPage::parse(
            "<html><body><div>Body text</div><script>var hidden = 1;</script></body></html>",
        );
        assert_eq!(page.content_snippet().unwrap(), "Body text");

        let long = "a".repeat(800);
        let page = ParsedPage::parse(&format!("<html><body><div>{long}</div></body></html>"));
        assert_eq!(page.content_snippet().unwrap().chars().count(), 500);
    }

    #[test]
    fn test_metadata_collects_all_fields() {
        let page = ParsedPage::parse(
            r#"<html><head><title>Example</title><meta name="keywords" content="a,b"></head>
            <body><p>Hello world and more.</p></body></html>"#,
        );
        let metadata = page.metadata().unwrap();
        assert_eq!(metadata.title, "Example");
        assert_eq!(metadata.description, "Hello world and more.");
        assert_eq!(metadata.keywords, vec!["a", "b"]);
        assert_eq!(metadata.main_content_snippet, "Hello world and more.");
    }

    #[test]
    fn test_colors_from_style_blocks() {
        let page = ParsedPage::parse(
            r#"<html><head>
            <style>body { color: #000000; } a { color: #3B82F6; }</style>
            <style>a:hover { color: #3b82f6; } footer { background: #ffffff; }</style>
            </head><body></body></html>"#,
        );
        let style = page.style_text().unwrap();
        assert_eq!(extract_colors(&style, 5), vec!["#3B82F6"]);
    }

    #[test]
    fn test_colors_are_capped_in_first_occurrence_order() {
        let css = "a{color:#111} b{color:#222222} c{color:rgba(1, 2, 3, 0.5)} d{color:#444} e{color:#555} f{color:#666}";
        assert_eq!(
            extract_colors(css, 5),
            vec!["#111", "#222222", "rgba(1, 2, 3, 0.5)", "#444", "#555"]
        );
        assert_eq!(extract_colors(css, 3), vec!["#111", "#222222", "rgba(1, 2, 3, 0.5)"]);
    }

    #[test]
    fn test_no_style_text_yields_no_colors() {
        let page = ParsedPage::parse("<html><body><p>plain</p></body></html>");
        let style = page.style_text().unwrap();
        assert!(extract_colors(&style, 5).is_empty());
    }
}
