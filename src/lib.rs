// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod digest;
pub mod format;
pub mod ingest;
pub mod job;
pub mod metrics;
pub mod notify;

// ---- Re-exports for stable public API ----
pub use crate::config::Config;
pub use crate::digest::{build_digest, NewsDigest, TopicGroup};
pub use crate::format::{format_digest, truncate_title};
pub use crate::ingest::types::{FetchError, NewsItem, NewsSource};
pub use crate::job::{DigestJob, RunOutcome};
pub use crate::notify::{deliver, DeliveryError, Notifier};
