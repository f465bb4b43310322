use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extractor::model::{PageProfile, normalize_whitespace};

/// Content containers in priority order; the first one present wins.
const CONTENT_SELECTORS: [&str; 8] = [
    "main",
    "article",
    "[role='main']",
    ".content",
    "#content",
    ".post",
    ".article",
    "body",
];

static CONTENT_CANDIDATES: Lazy<Vec<Selector>> = Lazy::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Title and raw body text length, read from the untouched document.
pub fn profile(document: &Html) -> PageProfile {
    PageProfile {
        title: document_title(document),
        body_text_length: body_text(document).chars().count(),
    }
}

/// Text of the `<title>` element with whitespace collapsed, or empty.
pub fn document_title(document: &Html) -> String {
    document
        .root_element()
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| normalize_whitespace(&title.text().collect::<String>()))
        .unwrap_or_default()
}

/// Raw text of the first content container found. Only the first match is
/// consulted, even when its text turns out empty.
///
/// Selection starts at the root element: `Html::select` also visits nodes
/// detached by the cleaner, which must not be candidates.
pub fn main_content(document: &Html) -> String {
    let root = document.root_element();
    for selector in CONTENT_CANDIDATES.iter() {
        if let Some(element) = root.select(selector).next() {
            return element.text().collect();
        }
    }

    String::new()
}

pub fn body_text(document: &Html) -> String {
    document
        .root_element()
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.text().collect())
        .unwrap_or_default()
}
