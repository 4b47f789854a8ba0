// src/ingest/types.rs
use thiserror::Error;

/// One headline from a news search feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed endpoint answered HTTP {0}")]
    Status(u16),
    #[error("parsing feed xml: {0}")]
    Parse(#[from] quick_xml::DeError),
}

/// Anything that can answer "latest headlines for this query".
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns at most `limit` items, in feed order.
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>, FetchError>;
    fn name(&self) -> &'static str;
}
