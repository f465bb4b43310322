pub mod capture;
pub mod categorizer;
pub mod config;
pub mod extractor;
pub mod filter;
pub mod interests;
pub mod storage;
pub mod telemetry;

pub use categorizer::{Category, categorize};
pub use interests::{Interest, InterestStats, InterestStore};
