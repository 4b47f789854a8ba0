// src/config.rs
use std::{env, time::Duration};

use crate::ingest::google_news;
use crate::notify::slack;

pub const ENV_SLACK_TOKEN: &str = "SLACK_TOKEN";
pub const ENV_SLACK_CHANNEL: &str = "SLACK_CHANNEL";
pub const ENV_TOPIC_LIMIT: &str = "DIGEST_TOPIC_LIMIT";
pub const ENV_JOBS_LIMIT: &str = "DIGEST_JOBS_LIMIT";
pub const ENV_FETCH_DELAY_MS: &str = "DIGEST_FETCH_DELAY_MS";
pub const ENV_FEED_BASE_URL: &str = "NEWS_FEED_BASE_URL";
pub const ENV_SLACK_API_BASE_URL: &str = "SLACK_API_BASE_URL";

pub const DEFAULT_CHANNEL: &str = "#all-ta-re_news";
pub const DEFAULT_TOPICS: [&str; 6] = ["네이버", "카카오", "쿠팡", "배민", "당근", "토스"];
pub const DEFAULT_JOBS_QUERY: &str = "개발자 채용 구인";
pub const DEFAULT_TOPIC_LIMIT: usize = 3;
pub const DEFAULT_JOBS_LIMIT: usize = 5;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 1_000;

/// Everything one run needs. Built once at startup, never mutated.
#[derive(Clone)]
pub struct Config {
    pub channel: String,
    /// Slack bot token. Empty when unset; Slack then rejects the post.
    pub token: String,
    pub topics: Vec<String>,
    pub jobs_query: String,
    pub topic_limit: usize,
    pub jobs_limit: usize,
    pub fetch_delay: Duration,
    pub feed_base_url: String,
    pub slack_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            token: String::new(),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            jobs_query: DEFAULT_JOBS_QUERY.to_string(),
            topic_limit: DEFAULT_TOPIC_LIMIT,
            jobs_limit: DEFAULT_JOBS_LIMIT,
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            feed_base_url: google_news::DEFAULT_BASE_URL.to_string(),
            slack_api_base_url: slack::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

// Keep the token out of Debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("channel", &self.channel)
            .field("token", &mask_token(&self.token))
            .field("topics", &self.topics)
            .field("jobs_query", &self.jobs_query)
            .field("topic_limit", &self.topic_limit)
            .field("jobs_limit", &self.jobs_limit)
            .field("fetch_delay", &self.fetch_delay)
            .field("feed_base_url", &self.feed_base_url)
            .field("slack_api_base_url", &self.slack_api_base_url)
            .finish()
    }
}

impl Config {
    /// Read the process environment. Missing token is not an error here.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            channel: non_empty_var(ENV_SLACK_CHANNEL).unwrap_or(d.channel),
            token: env::var(ENV_SLACK_TOKEN).unwrap_or_default(),
            topic_limit: parsed_var(ENV_TOPIC_LIMIT).unwrap_or(d.topic_limit),
            jobs_limit: parsed_var(ENV_JOBS_LIMIT).unwrap_or(d.jobs_limit),
            fetch_delay: parsed_var::<u64>(ENV_FETCH_DELAY_MS)
                .map(Duration::from_millis)
                .unwrap_or(d.fetch_delay),
            feed_base_url: non_empty_var(ENV_FEED_BASE_URL).unwrap_or(d.feed_base_url),
            slack_api_base_url: non_empty_var(ENV_SLACK_API_BASE_URL)
                .unwrap_or(d.slack_api_base_url),
            ..d
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = non_empty_var(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = key, value = %raw, "unparsable override, using default");
            None
        }
    }
}

/// First 15 characters then "...", or "None" when unset.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "None".to_string();
    }
    let head: String = token.chars().take(15).collect();
    format!("{head}...")
}
