use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};

const MIN_TITLE_LENGTH: usize = 3;
const MIN_BODY_TEXT_LENGTH: usize = 100;

static NON_DOCUMENT_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(pdf|jpe?g|png|gif|webp|bmp|ico|svg|css|js|mjs|json|xml|csv)$").unwrap()
});

/// Decide whether a loaded page carries enough content to be recorded.
pub fn is_worth_capturing(url: &str, document_title: &str, body_text_length: usize) -> bool {
    if is_excluded_url(url) {
        return false;
    }

    if document_title.chars().count() < MIN_TITLE_LENGTH {
        return false;
    }

    body_text_length >= MIN_BODY_TEXT_LENGTH
}

/// URL-only part of the gate, usable before the page's document is known.
///
/// Excludes anything that is not plain http(s) (browser pages, extension
/// pages, local files, `about:`), loopback hosts and URLs whose path names a
/// non-document resource.
pub fn is_excluded_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return true;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return true;
    }

    let loopback = match parsed.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => true,
    };
    if loopback {
        return true;
    }

    NON_DOCUMENT_EXTENSION.is_match(parsed.path())
}
