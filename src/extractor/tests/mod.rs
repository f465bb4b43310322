use std::fs;

use crate::extractor::{MAX_CONTENT_CHARS, PageDocument, extract, profile};
use crate::filter::is_worth_capturing;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_article() {
    let document = PageDocument::new("https://example.com/article", fixture("article.html"));
    let page = extract(&document);

    assert_eq!(page.url, "https://example.com/article");
    assert_eq!(page.title, "Sample Article - News Site");
    assert!(page.content.contains("first paragraph"));
    assert!(page.content.contains("second paragraph"));
    assert!(!page.content.contains("trackScroll"));
    assert!(!page.content.contains("Related coverage"));
    assert!(!page.content.contains("Copyright"));
    assert!(!page.content.contains("World"));
    assert!(!page.content.contains('\n'));
    assert!(!page.content.contains("  "));
    assert!(page.timestamp > 0);
}

#[test]
fn test_extract_blog_post_uses_post_container() {
    let document = PageDocument::new("https://blog.example.com/post", fixture("blog.html"));
    let page = extract(&document);

    assert_eq!(page.title, "How to Build Better Software | Tech Blog");
    assert!(page.content.starts_with("How to Build Better Software"));
    assert!(page.content.contains("Building better software"));
    assert!(page.content.contains("Key Principles"));
    assert!(!page.content.contains("Popular posts"));
    assert!(!page.content.contains("Blog Home"));
}

#[test]
fn test_empty_page_is_not_worth_capturing() {
    let document = PageDocument::new("https://example.com/empty", fixture("empty.html"));

    let profile = profile(&document);
    assert_eq!(profile.title, "Loading");
    assert!(!is_worth_capturing(
        &document.url,
        &profile.title,
        profile.body_text_length
    ));

    let page = extract(&document);
    assert_eq!(page.content, "");
}

#[test]
fn test_article_profile_passes_gate() {
    let document = PageDocument::new("https://example.com/article", fixture("article.html"));
    let profile = profile(&document);

    assert!(profile.body_text_length >= 100);
    assert!(is_worth_capturing(
        &document.url,
        &profile.title,
        profile.body_text_length
    ));
}

#[test]
fn test_empty_container_falls_back_to_body() {
    let html = "<html><head><title>Fallback</title></head><body><main>   </main><p>Outside\n\n text</p></body></html>";
    let page = extract(&PageDocument::new("https://example.com/", html));

    assert_eq!(page.content, "Outside text");
}

#[test]
fn test_containers_inside_removed_chrome_are_skipped() {
    let html = r#"<html><head><title>Chrome</title></head><body><header><div class="content">Header promo</div></header><nav><article>Nav teaser</article></nav><article>Real article body</article></body></html>"#;
    let page = extract(&PageDocument::new("https://example.com/story", html));

    assert_eq!(page.content, "Real article body");
}

#[test]
fn test_content_is_truncated() {
    let html = format!(
        "<html><head><title>Long</title></head><body><article>{}</article></body></html>",
        "word ".repeat(3000)
    );
    let page = extract(&PageDocument::new("https://example.com/long", html));

    assert_eq!(page.content.chars().count(), MAX_CONTENT_CHARS);
    assert!(page.content.starts_with("word word"));
}

#[test]
fn test_truncation_counts_characters() {
    let html = format!(
        "<html><body><main>{}</main></body></html>",
        "é".repeat(MAX_CONTENT_CHARS + 10)
    );
    let page = extract(&PageDocument::new("https://example.com/fr", html));

    assert_eq!(page.content.chars().count(), MAX_CONTENT_CHARS);
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let page = extract(&PageDocument::new("https://example.com/broken", html));

    assert_eq!(page.title, "Broken");
    assert_eq!(page.content, "Unclosed tagsMore content");
}

#[test]
fn test_extraction_is_deterministic() {
    let document = PageDocument::new("https://example.com/article", fixture("article.html"));
    let first = extract(&document);
    let second = extract(&document);

    assert_eq!(first.title, second.title);
    assert_eq!(first.content, second.content);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/.*"
        ) {
            let _ = extract(&PageDocument::new(url, html));
        }

        #[test]
        fn test_extract_output_is_normalized(html in ".*") {
            let page = extract(&PageDocument::new("https://example.com", html));
            prop_assert!(page.content.chars().count() <= MAX_CONTENT_CHARS);
            prop_assert!(!page.content.contains('\n'));
            prop_assert!(!page.content.starts_with(char::is_whitespace));
        }
    }
}
