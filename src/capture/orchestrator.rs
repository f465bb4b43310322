use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::capture::{BackgroundMessage, CaptureAck, ContentRequest, PageHost, PageLoadEvent, PageStatus};
use crate::categorizer::Category;
use crate::config::Config;
use crate::filter;
use crate::interests::InterestStore;
use crate::storage::{KeyValueStore, Record, StorageError};

/// Storage key of the user's capture preferences.
pub const PREFERENCES_KEY: &str = "userPreferences";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub auto_capture: Option<bool>,
}

/// Background glue between page events, the page-context extractor and the
/// interest store.
#[derive(Clone)]
pub struct CaptureOrchestrator {
    store: Arc<InterestStore>,
    storage: Arc<dyn KeyValueStore>,
    host: Arc<dyn PageHost>,
    auto_capture_default: bool,
    fallback_category: Category,
}

impl CaptureOrchestrator {
    pub fn new(
        store: Arc<InterestStore>,
        storage: Arc<dyn KeyValueStore>,
        host: Arc<dyn PageHost>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            storage,
            host,
            auto_capture_default: config.auto_capture(),
            fallback_category: config.fallback_category(),
        }
    }

    /// The store queried by the dashboard.
    pub fn store(&self) -> &Arc<InterestStore> {
        &self.store
    }

    /// First-run hook: warm the store.
    pub async fn on_installed(&self) {
        info!("capture pipeline installed");
        self.store.initialize().await;
    }

    /// Whether pages are captured automatically. Unreadable preferences fall
    /// back to the configured default.
    pub async fn auto_capture_enabled(&self) -> bool {
        let record = match self.storage.get(&[PREFERENCES_KEY]).await {
            Ok(record) => record,
            Err(e) => {
                warn!("failed to read preferences: {}", e);
                return self.auto_capture_default;
            }
        };

        record
            .get(PREFERENCES_KEY)
            .and_then(|value| serde_json::from_value::<Preferences>(value.clone()).ok())
            .and_then(|prefs| prefs.auto_capture)
            .unwrap_or(self.auto_capture_default)
    }

    /// Store the `autoCapture` preference, keeping any other preference
    /// fields intact.
    pub async fn set_auto_capture(&self, enabled: bool) -> Result<(), StorageError> {
        let mut record = self.storage.get(&[PREFERENCES_KEY]).await?;
        let mut prefs = match record.remove(PREFERENCES_KEY) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        prefs.insert("autoCapture".to_string(), Value::Bool(enabled));

        let mut record = Record::new();
        record.insert(PREFERENCES_KEY.to_string(), Value::Object(prefs));
        self.storage.set(record).await?;

        info!(enabled, "auto capture preference updated");
        Ok(())
    }

    /// React to a page update. Returns the acknowledgement when a capture
    /// was attempted.
    #[instrument(skip(self, event), fields(page_id = event.page_id, url))]
    pub async fn on_page_updated(&self, event: PageLoadEvent) -> Option<CaptureAck> {
        if event.status != PageStatus::Complete {
            return None;
        }
        let url = event.url?;
        tracing::Span::current().record("url", url.as_str());

        if filter::is_excluded_url(&url) {
            debug!("url excluded from capture");
            return None;
        }

        if !self.auto_capture_enabled().await {
            debug!("auto capture disabled");
            return None;
        }

        match self
            .host
            .capture(event.page_id, ContentRequest::CapturePageData)
            .await
        {
            Ok(Some(message)) => Some(self.handle_message(message).await),
            Ok(None) => {
                debug!("page produced no capture data");
                None
            }
            Err(e) => {
                error!("page data extraction failed: {}", e);
                None
            }
        }
    }

    /// Handle a message from a page context.
    pub async fn handle_message(&self, message: BackgroundMessage) -> CaptureAck {
        match message {
            BackgroundMessage::CaptureInterest { data } => {
                let fallback = self.resolve_fallback(data.category.as_deref());
                match self
                    .store
                    .try_capture_interest(&data.url, &data.title, &data.content, fallback)
                    .await
                {
                    Ok(interest) => {
                        info!(
                            domain = %interest.domain,
                            category = %interest.category,
                            visits = interest.visits,
                            "interest captured"
                        );
                        CaptureAck::captured(interest)
                    }
                    Err(e) => {
                        error!(url = %data.url, "failed to capture interest: {}", e);
                        CaptureAck::failed(e.to_string())
                    }
                }
            }
        }
    }

    /// Process page events one at a time until cancelled or the sender side
    /// is dropped.
    pub async fn run(&self, mut events: mpsc::Receiver<PageLoadEvent>, shutdown: CancellationToken) {
        info!("capture orchestrator started");
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("shutdown requested, stopping capture orchestrator");
                    break;
                }
                event = events.recv() => {
                    let Some(event) = event else {
                        info!("page event channel closed");
                        break;
                    };
                    self.on_page_updated(event).await;
                }
            }
        }
    }

    fn resolve_fallback(&self, category: Option<&str>) -> Category {
        match category {
            None => self.fallback_category,
            Some(raw) => Category::from_str(raw).unwrap_or_else(|e| {
                warn!("{}, using {}", e, self.fallback_category);
                self.fallback_category
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::host::MockPageHost;
    use crate::capture::{HostError, PageData};
    use crate::interests::ManualClock;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    const START: i64 = 1_700_000_000_000;

    fn page_data(url: &str, title: &str, content: &str) -> PageData {
        PageData {
            url: url.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: None,
            timestamp: Some(START),
        }
    }

    fn orchestrator(host: MockPageHost, storage: MemoryStorage) -> CaptureOrchestrator {
        let storage: Arc<dyn KeyValueStore> = Arc::new(storage);
        let store = Arc::new(InterestStore::with_clock(
            storage.clone(),
            Arc::new(ManualClock::new(START)),
        ));
        CaptureOrchestrator::new(store, storage, Arc::new(host), &Config::default())
    }

    #[tokio::test]
    async fn test_ignores_incomplete_and_excluded_pages() {
        let mut host = MockPageHost::new();
        host.expect_capture().never();
        let orchestrator = orchestrator(host, MemoryStorage::new());

        let loading = PageLoadEvent::loading(1, "https://a.example/");
        assert!(orchestrator.on_page_updated(loading).await.is_none());

        let no_url = PageLoadEvent {
            page_id: 1,
            status: PageStatus::Complete,
            url: None,
        };
        assert!(orchestrator.on_page_updated(no_url).await.is_none());

        for url in ["chrome://extensions", "http://localhost:3000/", "https://a.example/x.pdf"] {
            assert!(
                orchestrator
                    .on_page_updated(PageLoadEvent::complete(1, url))
                    .await
                    .is_none()
            );
        }
    }

    #[tokio::test]
    async fn test_respects_auto_capture_preference() {
        let mut host = MockPageHost::new();
        host.expect_capture().never();
        let orchestrator = orchestrator(host, MemoryStorage::new());

        assert!(orchestrator.auto_capture_enabled().await);
        orchestrator.set_auto_capture(false).await.unwrap();
        assert!(!orchestrator.auto_capture_enabled().await);

        let event = PageLoadEvent::complete(1, "https://a.example/");
        assert!(orchestrator.on_page_updated(event).await.is_none());
    }

    #[tokio::test]
    async fn test_set_auto_capture_keeps_other_preferences() {
        let storage = MemoryStorage::new();
        let mut record = Record::new();
        record.insert(
            PREFERENCES_KEY.to_string(),
            json!({ "autoCapture": true, "theme": "dark" }),
        );
        storage.set(record).await.unwrap();

        let orchestrator = orchestrator(MockPageHost::new(), storage.clone());
        orchestrator.set_auto_capture(false).await.unwrap();

        let record = storage.get(&[PREFERENCES_KEY]).await.unwrap();
        assert_eq!(
            record[PREFERENCES_KEY],
            json!({ "autoCapture": false, "theme": "dark" })
        );
    }

    #[tokio::test]
    async fn test_captures_page_reply() {
        let mut host = MockPageHost::new();
        host.expect_capture()
            .withf(|page_id, request| *page_id == 4 && *request == ContentRequest::CapturePageData)
            .times(1)
            .returning(|_, _| {
                Ok(Some(BackgroundMessage::CaptureInterest {
                    data: page_data(
                        "https://www.chef.example/pasta",
                        "Pasta night",
                        "an easy recipe for a weeknight meal",
                    ),
                }))
            });
        let orchestrator = orchestrator(host, MemoryStorage::new());

        let ack = orchestrator
            .on_page_updated(PageLoadEvent::complete(4, "https://www.chef.example/pasta"))
            .await
            .unwrap();

        assert!(ack.success);
        let interest = ack.interest.unwrap();
        assert_eq!(interest.domain, "chef.example");
        assert_eq!(interest.category, Category::Food);
        assert_eq!(orchestrator.store().get_interests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_extraction_failure_records_nothing() {
        let mut host = MockPageHost::new();
        host.expect_capture()
            .returning(|page_id, _| Err(HostError::PageGone(page_id)));
        let orchestrator = orchestrator(host, MemoryStorage::new());

        let ack = orchestrator
            .on_page_updated(PageLoadEvent::complete(9, "https://a.example/"))
            .await;

        assert!(ack.is_none());
        assert!(orchestrator.store().get_interests().await.is_empty());
    }

    #[tokio::test]
    async fn test_silent_page_records_nothing() {
        let mut host = MockPageHost::new();
        host.expect_capture().returning(|_, _| Ok(None));
        let orchestrator = orchestrator(host, MemoryStorage::new());

        let ack = orchestrator
            .on_page_updated(PageLoadEvent::complete(2, "https://a.example/"))
            .await;

        assert!(ack.is_none());
        assert!(orchestrator.store().get_interests().await.is_empty());
    }

    #[tokio::test]
    async fn test_message_category_is_the_fallback() {
        let orchestrator = orchestrator(MockPageHost::new(), MemoryStorage::new());

        let mut data = page_data("https://a.example/", "Untitled", "lorem ipsum dolor");
        data.category = Some("news".to_string());
        let ack = orchestrator
            .handle_message(BackgroundMessage::CaptureInterest { data })
            .await;
        assert_eq!(ack.interest.unwrap().category, Category::News);

        let mut data = page_data("https://b.example/", "Untitled", "lorem ipsum dolor");
        data.category = Some("gardening".to_string());
        let ack = orchestrator
            .handle_message(BackgroundMessage::CaptureInterest { data })
            .await;
        assert_eq!(ack.interest.unwrap().category, Category::Other);
    }

    #[tokio::test]
    async fn test_on_installed_initializes_store() {
        let orchestrator = orchestrator(MockPageHost::new(), MemoryStorage::new());
        assert!(!orchestrator.store().is_initialized());

        orchestrator.on_installed().await;
        assert!(orchestrator.store().is_initialized());
    }
}
