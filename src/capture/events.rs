use serde::{Deserialize, Serialize};

/// Host identifier of a tab or page.
pub type PageId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Loading,
    Complete,
}

/// Page update notification from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLoadEvent {
    pub page_id: PageId,
    pub status: PageStatus,
    #[serde(default)]
    pub url: Option<String>,
}

impl PageLoadEvent {
    pub fn complete(page_id: PageId, url: impl Into<String>) -> Self {
        Self {
            page_id,
            status: PageStatus::Complete,
            url: Some(url.into()),
        }
    }

    pub fn loading(page_id: PageId, url: impl Into<String>) -> Self {
        Self {
            page_id,
            status: PageStatus::Loading,
            url: Some(url.into()),
        }
    }
}
