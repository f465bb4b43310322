use thiserror::Error;

use crate::capture::PageId;

/// Failures of the host runtime while reaching into a page.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("page {0} is no longer available")]
    PageGone(PageId),
}
