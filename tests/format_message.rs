// tests/format_message.rs
use chrono::NaiveDate;
use news_digest_bot::{format_digest, truncate_title, NewsDigest, NewsItem};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()
}

#[test]
fn single_topic_without_jobs() {
    let mut d = NewsDigest::default();
    d.push_topic("Naver", vec![NewsItem::new("Naver launches X", "http://a")]);

    let msg = format_digest(&d, day());

    assert!(msg.starts_with("📰 *IT 뉴스 브리핑* - 11/04\n\n"));
    assert!(msg.contains("*🏢 Naver*\n"));
    assert_eq!(msg.matches("• ").count(), 1);
    assert!(msg.contains("• <http://a|Naver launches X>\n"));
    assert!(!msg.contains("채용 정보"));
}

#[test]
fn empty_topics_leave_no_trace() {
    let mut d = NewsDigest::default();
    d.push_topic("카카오", vec![]);
    d.push_topic("배민", vec![NewsItem::new("배민 소식", "http://b")]);
    d.push_topic("당근", vec![]);

    let msg = format_digest(&d, day());

    assert!(!msg.contains("카카오"));
    assert!(!msg.contains("당근"));
    assert!(msg.contains("*🏢 배민*"));
}

#[test]
fn jobs_section_has_no_trailing_blank_line() {
    let mut d = NewsDigest::default();
    d.jobs = vec![NewsItem::new("백엔드 개발자 채용", "http://j")];

    let msg = format_digest(&d, day());

    assert!(msg.ends_with("*💼 채용 정보*\n• <http://j|백엔드 개발자 채용>\n"));
}

#[test]
fn long_titles_are_cut_at_sixty_characters() {
    let long = "카카오모빌리티, 자율주행 택시 시범 운행 지역을 수도권 전역으로 넓히고 2026년 상용화 목표 제시 - 전자신문";
    let short = "카카오, 신작 공개";

    let cut = truncate_title(long);
    assert!(cut.ends_with("..."));
    assert_eq!(cut.chars().count(), 63);
    assert!(long.starts_with(cut.trim_end_matches("...")));
    assert_eq!(truncate_title(short), short);

    let mut d = NewsDigest::default();
    d.push_topic("카카오", vec![NewsItem::new(long, "http://l")]);
    let msg = format_digest(&d, day());
    assert!(msg.contains(&format!("• <http://l|{cut}>")));
    assert!(!msg.contains(long));
}

#[test]
fn same_digest_same_day_same_message() {
    let mut d = NewsDigest::default();
    d.push_topic("토스", vec![NewsItem::new("a", "http://a"), NewsItem::new("b", "http://b")]);
    d.jobs = vec![NewsItem::new("c", "http://c")];

    assert_eq!(format_digest(&d, day()), format_digest(&d.clone(), day()));
}
