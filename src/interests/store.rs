use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, error, info, instrument, warn};

use crate::categorizer::{Category, categorize};
use crate::interests::{
    CaptureError, Clock, Interest, InterestStats, SystemClock, extract_domain, interest_key,
};
use crate::storage::{KeyValueStore, Record, StorageError};

/// Storage key holding the serialized `[key, interest]` pairs.
pub const INTERESTS_KEY: &str = "userInterests";

/// Owner of the captured interests.
///
/// One instance per session, shared by handle. The mapping is loaded once
/// from storage on first use and every mutation writes the whole mapping
/// back.
pub struct InterestStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    interests: RwLock<BTreeMap<String, Interest>>,
    initialized: OnceCell<()>,
}

impl InterestStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            interests: RwLock::new(BTreeMap::new()),
            initialized: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Load persisted interests. Runs once; overlapping callers wait for the
    /// same load. A failed load leaves the mapping empty.
    pub async fn initialize(&self) {
        self.initialized
            .get_or_init(|| async {
                match self.load().await {
                    Ok(loaded) => {
                        info!(count = loaded.len(), "interest store initialized");
                        *self.interests.write().await = loaded;
                    }
                    Err(e) => {
                        warn!("failed to load interests, starting empty: {}", e);
                    }
                }
            })
            .await;
    }

    /// Record a page visit, logging instead of failing.
    ///
    /// Returns the inserted or updated interest, or `None` when it could not
    /// be persisted.
    pub async fn capture_interest(
        &self,
        url: &str,
        title: &str,
        content: &str,
        fallback: Category,
    ) -> Option<Interest> {
        match self.try_capture_interest(url, title, content, fallback).await {
            Ok(interest) => Some(interest),
            Err(e) => {
                error!(url, "failed to capture interest: {}", e);
                None
            }
        }
    }

    /// Record a page visit.
    ///
    /// A repeat visit to the same domain and title bumps `visits` and
    /// refreshes url, timestamp and category in place. On a persistence
    /// error the in-memory mapping keeps the change.
    #[instrument(skip(self, content), fields(domain))]
    pub async fn try_capture_interest(
        &self,
        url: &str,
        title: &str,
        content: &str,
        fallback: Category,
    ) -> Result<Interest, CaptureError> {
        self.initialize().await;

        let domain = extract_domain(url);
        tracing::Span::current().record("domain", domain.as_str());

        let category = categorize(title, content, fallback);
        let key = interest_key(&domain, title);
        let now = self.clock.now_millis();

        // Held across the write so concurrent captures persist in order.
        let mut interests = self.interests.write().await;

        let snapshot = match interests.get_mut(&key) {
            Some(existing) => {
                existing.visits = existing.visits.saturating_add(1);
                existing.timestamp = now;
                existing.category = category;
                existing.url = url.to_string();
                existing.clone()
            }
            None => {
                let interest = Interest {
                    url: url.to_string(),
                    title: title.to_string(),
                    domain,
                    category,
                    timestamp: now,
                    visits: 1,
                };
                interests.insert(key, interest.clone());
                interest
            }
        };

        let record = encode(&interests)?;
        self.storage.set(record).await?;

        debug!(
            category = %snapshot.category,
            visits = snapshot.visits,
            "interest captured"
        );
        Ok(snapshot)
    }

    pub async fn get_interests(&self) -> Vec<Interest> {
        self.initialize().await;
        self.interests.read().await.values().cloned().collect()
    }

    pub async fn get_interests_by_category(&self, category: Category) -> Vec<Interest> {
        self.initialize().await;
        self.interests
            .read()
            .await
            .values()
            .filter(|interest| interest.category == category)
            .cloned()
            .collect()
    }

    /// Most visited first. Equal counts keep key order.
    pub async fn get_top_interests(&self, limit: usize) -> Vec<Interest> {
        let mut interests = self.get_interests().await;
        interests.sort_by(|a, b| b.visits.cmp(&a.visits));
        interests.truncate(limit);
        interests
    }

    /// Most recently captured first.
    pub async fn get_recent_interests(&self, limit: usize) -> Vec<Interest> {
        let mut interests = self.get_interests().await;
        interests.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        interests.truncate(limit);
        interests
    }

    pub async fn get_interest_stats(&self) -> InterestStats {
        self.initialize().await;
        let interests = self.interests.read().await;
        InterestStats::compute(interests.values(), self.clock.now_millis())
    }

    /// Drop every interest and persist the empty mapping. A failed write is
    /// logged; the in-memory mapping stays empty either way.
    pub async fn clear_interests(&self) {
        self.initialize().await;

        let mut interests = self.interests.write().await;
        interests.clear();

        let result = match encode(&interests) {
            Ok(record) => self.storage.set(record).await.map_err(CaptureError::from),
            Err(e) => Err(CaptureError::from(e)),
        };
        match result {
            Ok(()) => info!("interests cleared"),
            Err(e) => error!("failed to persist cleared interests: {}", e),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, Interest>, StorageError> {
        let mut record = self.storage.get(&[INTERESTS_KEY]).await?;

        let Some(value) = record.remove(INTERESTS_KEY) else {
            return Ok(BTreeMap::new());
        };
        if value.is_null() {
            return Ok(BTreeMap::new());
        }

        let pairs: Vec<(String, Interest)> =
            serde_json::from_value(value).map_err(StorageError::Decode)?;
        Ok(pairs.into_iter().collect())
    }
}

fn encode(interests: &BTreeMap<String, Interest>) -> Result<Record, serde_json::Error> {
    let pairs: Vec<(&String, &Interest)> = interests.iter().collect();
    let mut record = Record::new();
    record.insert(INTERESTS_KEY.to_string(), serde_json::to_value(pairs)?);
    Ok(record)
}
