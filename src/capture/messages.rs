use serde::{Deserialize, Serialize};

use crate::extractor::ExtractedPage;
use crate::interests::Interest;

/// Background to page: ask the injected extractor for the page's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ContentRequest {
    CapturePageData,
}

/// Page to background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BackgroundMessage {
    CaptureInterest { data: PageData },
}

/// Extracted page data carried by `captureInterest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub url: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl From<ExtractedPage> for PageData {
    fn from(page: ExtractedPage) -> Self {
        Self {
            url: page.url,
            title: page.title,
            content: page.content,
            category: None,
            timestamp: Some(page.timestamp),
        }
    }
}

/// Reply to a `captureInterest` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaptureAck {
    pub fn captured(interest: Interest) -> Self {
        Self {
            success: true,
            interest: Some(interest),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            interest: None,
            error: Some(error.into()),
        }
    }
}
