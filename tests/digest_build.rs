// tests/digest_build.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use news_digest_bot::ingest::google_news::GoogleNewsProvider;
use news_digest_bot::{build_digest, FetchError, NewsItem, NewsSource};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Fails for one query, answers the rest.
struct FlakySource {
    failing: &'static str,
}

#[async_trait]
impl NewsSource for FlakySource {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>, FetchError> {
        if query == self.failing {
            return Err(FetchError::Status(500));
        }
        Ok((0..limit)
            .map(|i| NewsItem::new(format!("{query} #{i}"), format!("http://{i}")))
            .collect())
    }
    fn name(&self) -> &'static str {
        "FlakySource"
    }
}

#[tokio::test]
async fn one_failing_topic_does_not_stop_the_others() {
    let src = FlakySource { failing: "쿠팡" };
    let topics: Vec<String> = ["네이버", "쿠팡", "토스"].iter().map(|s| s.to_string()).collect();

    let d = build_digest(&src, &topics, 3, "개발자 채용 구인", 5, Duration::ZERO).await;

    assert_eq!(d.topics.len(), 3, "failed topic keeps its slot");
    assert_eq!(d.topic("네이버").map(|v| v.len()), Some(3));
    assert_eq!(d.topic("쿠팡").map(|v| v.len()), Some(0));
    assert_eq!(d.topic("토스").map(|v| v.len()), Some(3));
    assert_eq!(d.jobs.len(), 5);
}

#[tokio::test]
async fn failing_jobs_query_leaves_topics_intact() {
    let src = FlakySource { failing: "jobs" };
    let topics = vec!["네이버".to_string()];

    let d = build_digest(&src, &topics, 2, "jobs", 5, Duration::ZERO).await;

    assert_eq!(d.topic("네이버").map(|v| v.len()), Some(2));
    assert!(d.jobs.is_empty());
}

/// Counts WARN events seen while installed as the thread's default subscriber.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn transport_failure_is_logged_once() {
    let warns = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(warns.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    // Port 9 (discard) on loopback is closed in test environments.
    let src = GoogleNewsProvider::with_base_url("http://127.0.0.1:9");
    let topics = vec!["배민".to_string()];
    let d = build_digest(&src, &topics, 3, "jobs", 0, Duration::ZERO).await;

    assert_eq!(d.topic("배민").map(|v| v.len()), Some(0));
    assert_eq!(warns.0.load(Ordering::SeqCst), 1);
}
