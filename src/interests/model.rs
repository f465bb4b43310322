use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::categorizer::Category;

/// Width of the "recent" window in interest statistics.
pub const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// A visited page, deduplicated by domain and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    /// Last URL seen for this entry.
    pub url: String,
    pub title: String,
    pub domain: String,
    pub category: Category,
    /// Milliseconds since the epoch of the most recent capture.
    pub timestamp: i64,
    pub visits: u32,
}

/// Aggregate view of the store for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestStats {
    pub total: usize,
    /// Entries captured within `RECENT_WINDOW_MS` of now, boundary included.
    pub recent: usize,
    pub categories: BTreeMap<Category, usize>,
    pub domains: BTreeMap<String, usize>,
}

impl InterestStats {
    pub fn compute<'a>(interests: impl IntoIterator<Item = &'a Interest>, now_millis: i64) -> Self {
        let cutoff = now_millis - RECENT_WINDOW_MS;
        let mut stats = Self::default();

        for interest in interests {
            stats.total += 1;
            if interest.timestamp >= cutoff {
                stats.recent += 1;
            }
            *stats.categories.entry(interest.category).or_default() += 1;
            *stats.domains.entry(interest.domain.clone()).or_default() += 1;
        }

        stats
    }
}
