#![no_main]

use libfuzzer_sys::fuzz_target;

use pagetrail::extractor::{MAX_CONTENT_CHARS, PageDocument, extract, profile};
use pagetrail::{Category, categorize};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data).to_string();
    let document = PageDocument::new("https://example.com/", html);

    // Neither the gate nor the extractor may panic on arbitrary markup
    let _ = profile(&document);
    let page = extract(&document);
    assert!(page.content.chars().count() <= MAX_CONTENT_CHARS);

    let _ = categorize(&page.title, &page.content, Category::Other);
});
