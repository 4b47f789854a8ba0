// src/notify/mod.rs
pub mod slack;

use metrics::counter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("chat api request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat api answered HTTP {0}")]
    Status(u16),
    #[error("chat api response unreadable: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("chat api rejected message: {0}")]
    Rejected(String),
}

/// A destination that accepts one rendered digest message.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn post_message(&self, text: &str) -> Result<(), DeliveryError>;
    fn name(&self) -> &'static str;
}

/// Post once and report success. Failures are logged and counted, never raised.
pub async fn deliver(notifier: &dyn Notifier, text: &str) -> bool {
    match notifier.post_message(text).await {
        Ok(()) => {
            counter!("digest_delivery_total", "outcome" => "ok").increment(1);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, notifier = notifier.name(), "digest delivery failed");
            counter!("digest_delivery_total", "outcome" => "failed").increment(1);
            false
        }
    }
}
