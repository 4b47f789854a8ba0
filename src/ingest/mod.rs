// src/ingest/mod.rs
pub mod google_news;
pub mod types;

/// Normalize a headline: decode entities and collapse whitespace.
///
/// Everything else is kept as published, including angle-bracketed titles of
/// works (`<SNL 코리아>`). Truncation is a formatting concern.
pub fn normalize_title(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Collapse whitespace
    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}
