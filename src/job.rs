// src/job.rs
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::Config;
use crate::digest::{build_digest, NewsDigest};
use crate::format::format_digest;
use crate::ingest::google_news::GoogleNewsProvider;
use crate::ingest::types::NewsSource;
use crate::notify::{deliver, slack::SlackNotifier, Notifier};

/// What a run produced, for callers that want more than the log line.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub digest: NewsDigest,
    pub message: String,
    pub delivered: bool,
}

/// Fetch all topics, render one message, post it once.
pub struct DigestJob {
    config: Config,
    source: Box<dyn NewsSource>,
    notifier: Box<dyn Notifier>,
}

impl DigestJob {
    /// Production wiring: Google News search + Slack Web API.
    pub fn from_config(config: Config) -> Self {
        let source = GoogleNewsProvider::with_base_url(config.feed_base_url.clone());
        let notifier = SlackNotifier::from_config(&config);
        Self::new(config, Box::new(source), Box::new(notifier))
    }

    pub fn new(config: Config, source: Box<dyn NewsSource>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            config,
            source,
            notifier,
        }
    }

    pub async fn run(&self) -> RunOutcome {
        self.run_on(Local::now().date_naive()).await
    }

    /// Same as [`run`](Self::run) with an explicit header date.
    pub async fn run_on(&self, date: NaiveDate) -> RunOutcome {
        crate::metrics::ensure_described();
        info!("news digest starting");

        let cfg = &self.config;
        let digest = build_digest(
            self.source.as_ref(),
            &cfg.topics,
            cfg.topic_limit,
            &cfg.jobs_query,
            cfg.jobs_limit,
            cfg.fetch_delay,
        )
        .await;
        info!(items = digest.total_items(), "news collected");

        let message = format_digest(&digest, date);
        let delivered = deliver(self.notifier.as_ref(), &message).await;

        if delivered {
            info!(channel = %cfg.channel, "digest delivered");
        } else {
            tracing::error!(channel = %cfg.channel, "digest not delivered");
        }

        RunOutcome {
            digest,
            message,
            delivered,
        }
    }
}
