// src/format.rs
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::digest::NewsDigest;
use crate::ingest::types::NewsItem;

pub const TITLE_MAX_CHARS: usize = 60;
const ELLIPSIS: &str = "...";

const HEADER_LABEL: &str = "📰 *IT 뉴스 브리핑*";
const TOPIC_ICON: &str = "🏢";
const JOBS_HEADER: &str = "*💼 채용 정보*";

/// Cut to `TITLE_MAX_CHARS` characters (not bytes) and mark the cut.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        title.to_string()
    }
}

// Titles go in unescaped; a `>` or `|` in a title ends the link text early.
fn push_bullets(out: &mut String, items: &[NewsItem]) {
    for it in items {
        let _ = writeln!(out, "• <{}|{}>", it.link, truncate_title(&it.title));
    }
}

/// Render the Slack mrkdwn message for `digest`, dated `date` (shown as MM/DD).
///
/// Empty topic groups are left out completely; the jobs block only appears
/// when it has at least one item.
pub fn format_digest(digest: &NewsDigest, date: NaiveDate) -> String {
    let mut out = String::new();
    let _ = write!(out, "{HEADER_LABEL} - {}\n\n", date.format("%m/%d"));

    for group in digest.topics.iter().filter(|g| !g.items.is_empty()) {
        let _ = writeln!(out, "*{TOPIC_ICON} {}*", group.label);
        push_bullets(&mut out, &group.items);
        out.push('\n');
    }

    if !digest.jobs.is_empty() {
        out.push_str(JOBS_HEADER);
        out.push('\n');
        push_bullets(&mut out, &digest.jobs);
    }

    out
}
