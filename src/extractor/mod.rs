pub mod cleaner;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::{ExtractedPage, MAX_CONTENT_CHARS, PageDocument, PageProfile};

use chrono::Utc;
use scraper::Html;

/// Title and body length of a document, for the capture gate.
pub fn profile(document: &PageDocument) -> PageProfile {
    reader::profile(&Html::parse_document(&document.html))
}

/// Produce the bounded plain-text snapshot of a page.
pub fn extract(document: &PageDocument) -> ExtractedPage {
    let mut html = Html::parse_document(&document.html);

    // 1. Title comes from the untouched document
    let title = reader::document_title(&html);

    // 2. Drop scripts, navigation and other chrome from the working copy
    cleaner::strip_non_content(&mut html);

    // 3. First content container, falling back to the whole body
    let mut content = model::normalize_content(&reader::main_content(&html));
    if content.is_empty() {
        content = model::normalize_content(&reader::body_text(&html));
    }

    ExtractedPage {
        url: document.url.clone(),
        title,
        content,
        timestamp: Utc::now().timestamp_millis(),
    }
}
