// src/ingest/google_news.rs
use async_trait::async_trait;
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::normalize_title;
use crate::ingest::types::{FetchError, NewsItem, NewsSource};

pub const DEFAULT_BASE_URL: &str = "https://news.google.com";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
}

/// Search feed URL for `query`, pinned to the Korean edition (hl=ko, gl=KR).
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/rss/search?q={}&hl=ko&gl=KR&ceid=KR:ko",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

pub struct GoogleNewsProvider {
    mode: Mode,
}

enum Mode {
    // Same XML is returned for every query.
    Fixture(String),
    Http {
        base_url: String,
        client: reqwest::Client,
    },
}

impl GoogleNewsProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at another host (mock servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                base_url: base_url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    /// Parse an RSS document and keep what the leading `limit` entries carry.
    /// Entries without a title or link are dropped, so fewer than `limit` may come back.
    pub fn parse_items_from_str(s: &str, limit: usize) -> Result<Vec<NewsItem>, FetchError> {
        let t0 = std::time::Instant::now();
        let rss: Rss = from_str(s)?;

        let out: Vec<NewsItem> = rss
            .channel
            .item
            .into_iter()
            .take(limit)
            .filter_map(|it| {
                let title = normalize_title(it.title.as_deref()?);
                let link = it.link?.trim().to_string();
                if title.is_empty() || link.is_empty() {
                    return None;
                }
                Some(NewsItem { title, link })
            })
            .collect();

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("digest_parse_ms").record(ms);
        counter!("digest_items_total").increment(out.len() as u64);
        Ok(out)
    }
}

impl Default for GoogleNewsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for GoogleNewsProvider {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>, FetchError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        counter!("digest_fetch_total").increment(1);

        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s, limit),
            Mode::Http { base_url, client } => {
                let t0 = std::time::Instant::now();
                let url = search_url(base_url, query);
                let resp = client.get(&url).send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::Status(status.as_u16()));
                }
                let body = resp.text().await?;
                histogram!("digest_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
                Self::parse_items_from_str(&body, limit)
            }
        }
    }

    fn name(&self) -> &'static str {
        "GoogleNews"
    }
}
