use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound on the stored text snapshot, in characters.
pub const MAX_CONTENT_CHARS: usize = 5000;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A rendered page as the host hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    pub url: String,
    pub html: String,
}

impl PageDocument {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Text snapshot of a page, as sent from the page context to the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    pub url: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since the epoch at extraction time.
    pub timestamp: i64,
}

/// What the capture gate needs to know about a document before extracting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProfile {
    pub title: String,
    pub body_text_length: usize,
}

/// Collapse every whitespace run (newlines included) to a single space and
/// trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Normalize and cut to `MAX_CONTENT_CHARS` characters.
pub fn normalize_content(text: &str) -> String {
    let normalized = normalize_whitespace(text);
    if normalized.chars().count() <= MAX_CONTENT_CHARS {
        return normalized;
    }
    normalized.chars().take(MAX_CONTENT_CHARS).collect()
}
