use async_trait::async_trait;
use dashmap::DashMap;

use crate::capture::{BackgroundMessage, ContentRequest, HostError, PageId, content};
use crate::extractor::PageDocument;

/// The host runtime as seen from the background side: injects the
/// page-context extractor into a page and relays its reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageHost: Send + Sync {
    async fn capture(
        &self,
        page_id: PageId,
        request: ContentRequest,
    ) -> Result<Option<BackgroundMessage>, HostError>;
}

/// In-process host over documents registered by page id.
#[derive(Default)]
pub struct DocumentHost {
    pages: DashMap<PageId, PageDocument>,
}

impl DocumentHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `document` the current content of `page_id`.
    pub fn register(&self, page_id: PageId, document: PageDocument) {
        self.pages.insert(page_id, document);
    }

    /// Close a page.
    pub fn forget(&self, page_id: PageId) {
        self.pages.remove(&page_id);
    }
}

#[async_trait]
impl PageHost for DocumentHost {
    async fn capture(
        &self,
        page_id: PageId,
        request: ContentRequest,
    ) -> Result<Option<BackgroundMessage>, HostError> {
        let document = self
            .pages
            .get(&page_id)
            .map(|entry| entry.value().clone())
            .ok_or(HostError::PageGone(page_id))?;

        Ok(content::handle_request(&request, &document))
    }
}
