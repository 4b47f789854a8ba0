// src/digest.rs
use std::time::Duration;

use metrics::counter;

use crate::ingest::types::{NewsItem, NewsSource};

/// Headlines gathered under one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    pub label: String,
    pub items: Vec<NewsItem>,
}

/// One run's worth of news: company groups in fixed order, then job listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsDigest {
    pub topics: Vec<TopicGroup>,
    pub jobs: Vec<NewsItem>,
}

impl NewsDigest {
    pub fn push_topic(&mut self, label: impl Into<String>, items: Vec<NewsItem>) {
        self.topics.push(TopicGroup {
            label: label.into(),
            items,
        });
    }

    pub fn topic(&self, label: &str) -> Option<&[NewsItem]> {
        self.topics
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.items.as_slice())
    }

    pub fn total_items(&self) -> usize {
        self.topics.iter().map(|g| g.items.len()).sum::<usize>() + self.jobs.len()
    }
}

/// Fetch one query; any failure becomes an empty list so the run keeps going.
pub async fn fetch_or_empty(source: &dyn NewsSource, query: &str, limit: usize) -> Vec<NewsItem> {
    tracing::info!(query, "searching news");
    match source.fetch(query, limit).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, query, provider = source.name(), "news search failed");
            counter!("digest_fetch_errors_total").increment(1);
            Vec::new()
        }
    }
}

/// Fetch every topic in order, pausing `delay` after each, then the jobs query.
pub async fn build_digest(
    source: &dyn NewsSource,
    topics: &[String],
    topic_limit: usize,
    jobs_query: &str,
    jobs_limit: usize,
    delay: Duration,
) -> NewsDigest {
    let mut digest = NewsDigest::default();

    for topic in topics {
        let items = fetch_or_empty(source, topic, topic_limit).await;
        digest.push_topic(topic.clone(), items);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    digest.jobs = fetch_or_empty(source, jobs_query, jobs_limit).await;
    digest
}
