use tracing::debug;

use crate::capture::{BackgroundMessage, ContentRequest};
use crate::extractor::{self, PageDocument};
use crate::filter;

/// Page-context side of the messaging channel.
///
/// Answers `capturePageData` with a `captureInterest` message, or with
/// nothing when the page is not worth capturing.
pub fn handle_request(request: &ContentRequest, document: &PageDocument) -> Option<BackgroundMessage> {
    match request {
        ContentRequest::CapturePageData => {
            let profile = extractor::profile(document);
            if !filter::is_worth_capturing(&document.url, &profile.title, profile.body_text_length) {
                debug!(url = %document.url, "page not worth capturing");
                return None;
            }

            let page = extractor::extract(document);
            Some(BackgroundMessage::CaptureInterest { data: page.into() })
        }
    }
}
