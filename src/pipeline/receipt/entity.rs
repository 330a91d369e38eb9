use std::sync::LazyLock;

use regex::Regex;

use crate::pipeline::messages::MessageTemplates;

/// Issuer-name patterns, tried in order. Each captures the name as `name`.
static ENTITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // OO 주식회사 / OO㈜
        r"(?P<name>[가-힣A-Za-z0-9&]+[ \t]*(?:주식회사|㈜|\(주\)))",
        // 주식회사 OO / ㈜OO / (주)OO
        r"(?P<name>(?:주식회사|㈜|\(주\))[ \t]*[가-힣A-Za-z0-9&]+?)(?:은|는)?\b",
        // Financial institution opening a line, followed by a particle or more text.
        // A bare list entry ("신용카드,") never stands at line start with a follower.
        r"(?m)^[ \t]*(?P<name>[가-힣A-Za-z0-9]{1,20}?(?:은행|카드|증권|보험|캐피탈|생명|화재))(?:(?:은|는)[ \t]|[ \t]+[가-힣A-Za-z(])",
        // "OO는 ..." at the start of a line
        r"(?m)^\s*(?P<name>[가-힣A-Za-z0-9]{2,20})(?:은|는)\s",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid entity pattern"))
    .collect()
});

/// Issuer of the document, or the "not specified" fallback.
pub fn detect_entity(raw_text: &str, max_chars: usize) -> String {
    ENTITY_PATTERNS
        .iter()
        .find_map(|re| re.captures(raw_text))
        .and_then(|caps| caps.name("name").map(|m| m.as_str().trim().to_string()))
        .filter(|name| !name.is_empty())
        .map(|name| name.chars().take(max_chars).collect())
        .unwrap_or_else(|| MessageTemplates::WHO_FALLBACK.to_string())
}
