/// User-facing wording for signals, summary slots and suggested actions.
///
/// The rule set targets Korean privacy notices, so all wording is Korean.
/// Every string a receipt shows is produced here.
pub struct MessageTemplates;

impl MessageTemplates {
    // ── Signals ───────────────────────────────────────────────────────

    pub const REVOKE_PATH_MISSING_TITLE: &'static str = "동의 철회 경로 없음";
    pub const REVOKE_PATH_MISSING_DESCRIPTION: &'static str =
        "동의 철회/삭제/정정 절차가 문서에서 확인되지 않았습니다. \
         개인정보 보호법상 열람·정정·삭제 요청 방법을 안내해야 합니다.";
    pub const REVOKE_PATH_MISSING_NOTE: &'static str = "(문서 전체에서 철회/삭제/정정 안내 없음)";

    pub const THIRD_PARTY_TITLE: &'static str = "제3자 제공 포함";
    pub const THIRD_PARTY_DESCRIPTION: &'static str =
        "개인정보가 제3자에게 제공됩니다. 제공처와 항목을 확인하세요.";

    pub const RETENTION_MISSING_TITLE: &'static str = "보유 기간 없음";
    pub const RETENTION_MISSING_DESCRIPTION: &'static str = "보유·이용 기간이 명시되지 않았습니다.";
    pub const RETENTION_MISSING_NOTE: &'static str = "(보유/보관/파기 기간 미기재)";

    pub const RETENTION_PERMANENT_TITLE: &'static str = "무기한 보유";
    pub const RETENTION_PERMANENT_DESCRIPTION: &'static str =
        "개인정보를 무기한 또는 영구 보유한다고 기재되어 있습니다.";

    pub const RETENTION_VAGUE_TITLE: &'static str = "보유 기간 모호";
    pub const RETENTION_VAGUE_DESCRIPTION: &'static str =
        "보유 기간이 '목적 달성 시' 등 추상 표현으로 되어 있습니다.";

    pub const MARKETING_TITLE: &'static str = "마케팅 목적 포함";
    pub const VAGUE_THIRD_PARTY_TITLE: &'static str = "제3자 표현 모호";
    pub const OVER_COLLECTION_TITLE: &'static str = "과잉 수집 의심";

    /// Location used by synthetic evidence that covers the whole document.
    pub const WHOLE_DOCUMENT: &'static str = "문서 전체";

    pub fn retention_years(years: &str) -> (String, String) {
        (
            format!("{years}년 이상 보유"),
            format!("개인정보 보유 기간이 {years}년 이상으로 기재되어 있습니다."),
        )
    }

    pub fn retention_months(months: &str) -> (String, String) {
        (
            format!("{months}개월 이상 보유"),
            format!("개인정보 보유 기간이 {months}개월 이상으로 기재되어 있습니다."),
        )
    }

    pub fn marketing(keywords: &[&str]) -> String {
        if keywords.is_empty() {
            "개인정보 이용 목적에 마케팅/광고가 포함되어 있습니다.".to_string()
        } else {
            format!(
                "개인정보 이용 목적에 마케팅·광고가 포함되어 있습니다: {}",
                keywords.join(", ")
            )
        }
    }

    pub fn vague_third_party(phrases: &[String]) -> String {
        format!("제3자 제공 표현이 모호합니다: {}", phrases.join(", "))
    }

    pub fn over_collection(keywords: &[&str]) -> String {
        format!(
            "필수 범위를 넘어서는 민감/고유식별 정보가 포함되어 있습니다: {}",
            keywords.join(", ")
        )
    }

    /// Location for synthetic evidence quoting an extracted field's value.
    pub fn field_location(field: &str) -> String {
        format!("추출 필드: {field}")
    }

    // ── Seven-line summary ────────────────────────────────────────────

    pub const WHO_FALLBACK: &'static str = "발급 기관 미기재";
    pub const WHAT_FALLBACK: &'static str = "수집 항목 미기재";
    pub const WHY_FALLBACK: &'static str = "목적 미기재";
    pub const WHEN_FALLBACK: &'static str = "보유기간 미기재";
    pub const WHERE_FALLBACK: &'static str = "제3자/이전 없음";
    pub const REVOKE_FALLBACK: &'static str = "철회 경로 미기재";
    pub const NO_RISK: &'static str = "추가 위험 신호 없음";

    /// Marker prepended to optional data items.
    pub const OPTIONAL_PREFIX: &'static str = "(선택)";

    pub fn more_items(hidden: usize) -> String {
        format!(" 외 {hidden}개")
    }

    pub fn risk_summary(high: usize, medium: usize, titles: &[&str]) -> String {
        let mut parts = Vec::new();
        if high > 0 {
            parts.push(format!("고위험 {high}건"));
        }
        if medium > 0 {
            parts.push(format!("중위험 {medium}건"));
        }
        format!("위험 신호 {}: {}", parts.join(", "), titles.join("; "))
    }

    // ── Actions ───────────────────────────────────────────────────────

    pub const WITHDRAW_CONSENT_LABEL: &'static str = "마케팅 수신 거부";
    pub const WITHDRAW_CONSENT_DESCRIPTION: &'static str = "필요시 마케팅/광고 동의를 철회하세요.";
    pub const STOP_THIRD_PARTY_LABEL: &'static str = "제3자 제공 중단 요청";
    pub const STOP_THIRD_PARTY_DESCRIPTION: &'static str =
        "제3자 제공 범위가 넓거나 모호할 때 중단을 요청합니다.";
    pub const DELETE_DATA_LABEL: &'static str = "개인정보 삭제 요청";
    pub const DELETE_DATA_DESCRIPTION: &'static str =
        "수집 목적이 끝났거나 과잉 수집 시 삭제를 요청합니다.";
}
