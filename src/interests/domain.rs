use url::Url;

/// Domain recorded for URLs that have no parseable host.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Lower-cased hostname of `url` without a leading `www.`.
pub fn extract_domain(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase));

    match host {
        Some(host) if !host.is_empty() => host
            .strip_prefix("www.")
            .map(str::to_string)
            .unwrap_or(host),
        _ => UNKNOWN_DOMAIN.to_string(),
    }
}

/// Dedup key of an interest: one entry per domain and page title.
pub fn interest_key(domain: &str, title: &str) -> String {
    format!("{}:{}", domain, title)
}
