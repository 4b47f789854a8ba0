use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

/// One-time metric descriptions, so series carry help text once a recorder is installed.
pub fn ensure_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("digest_fetch_total", "News search requests issued.");
        describe_counter!(
            "digest_fetch_errors_total",
            "News searches that failed and were treated as empty."
        );
        describe_counter!("digest_items_total", "Headlines parsed from search feeds.");
        describe_counter!(
            "digest_delivery_total",
            "Digest delivery attempts, labelled by outcome."
        );
        describe_histogram!("digest_fetch_ms", "Feed request time in milliseconds.");
        describe_histogram!("digest_parse_ms", "Feed parse time in milliseconds.");
    });
}
