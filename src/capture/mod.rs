pub mod content;
pub mod errors;
pub mod events;
pub mod host;
pub mod messages;
pub mod orchestrator;

pub use errors::HostError;
pub use events::{PageId, PageLoadEvent, PageStatus};
pub use host::{DocumentHost, PageHost};
pub use messages::{BackgroundMessage, CaptureAck, ContentRequest, PageData};
pub use orchestrator::{CaptureOrchestrator, PREFERENCES_KEY, Preferences};
