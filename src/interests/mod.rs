pub mod clock;
pub mod domain;
pub mod errors;
pub mod model;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::{UNKNOWN_DOMAIN, extract_domain, interest_key};
pub use errors::CaptureError;
pub use model::{Interest, InterestStats, RECENT_WINDOW_MS};
pub use store::{INTERESTS_KEY, InterestStore};
