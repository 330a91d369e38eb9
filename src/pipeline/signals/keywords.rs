use std::sync::LazyLock;

use regex::Regex;

/// Permanent or unbounded retention.
pub static PERMANENT_RETENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"무기한|영구|무한").expect("Invalid permanent retention pattern"));

/// Deadlines tied to an open-ended condition instead of a period.
pub static VAGUE_RETENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"목적\s*달성\s*시|필요\s*시까지|서비스\s*제공\s*시까지")
        .expect("Invalid vague retention pattern")
});

pub static RETENTION_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*년").expect("Invalid retention years pattern"));

pub static RETENTION_MONTHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*개월").expect("Invalid retention months pattern"));

pub const MARKETING_KEYWORDS: &[&str] = &["마케팅", "광고", "프로모션", "캠페인", "뉴스레터"];

/// Token that marks a raw line as talking about purposes.
pub const PURPOSE_TOKEN: &str = "목적";

/// Catch-all wording that leaves recipients open-ended.
pub static VAGUE_THIRD_PARTY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"등\s*제3자",
        r"기타\s*제3자",
        r"관련\s*회사",
        r"제휴\s*업체",
        r"필요\s*범위",
        r"관계사",
        r"계열사",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid vague third-party pattern"))
    .collect()
});

/// Sensitive or unique identifiers whose collection suggests over-collection.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "주민등록",
    "주민번호",
    "계좌",
    "신용카드",
    "여권",
    "운전면허",
    "외국인등록",
    "위치정보",
    "건강",
    "병력",
    "생체",
    "지문",
    "얼굴",
    "홍채",
    "망막",
    "OTP",
    "보안코드",
];
