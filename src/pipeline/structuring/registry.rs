use std::sync::LazyLock;

use regex::Regex;

/// Canonical field names. The first six are produced by the structurer;
/// the rest are read by downstream stages when an ExtractResult from another
/// source carries them.
pub mod field_names {
    pub const DATA_COLLECTED: &str = "data_collected";
    pub const PURPOSES: &str = "purposes";
    pub const RETENTION: &str = "retention";
    pub const THIRD_PARTY: &str = "third_party";
    pub const OVERSEAS_TRANSFER: &str = "overseas_transfer";
    pub const REVOKE_PATH: &str = "revoke_path";

    pub const REQUIRED_ITEMS: &str = "required_items";
    pub const OPTIONAL_ITEMS: &str = "optional_items";
    pub const OUTSOURCING: &str = "outsourcing";
    pub const DATA_TRANSFERS: &str = "data_transfers";
}

/// How a merged section block is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Split into list items.
    List,
    /// Keep the trimmed block.
    Scalar,
}

/// One registry entry: a field, its value shape, and its ordered triggers.
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: ValueShape,
    pub triggers: Vec<Regex>,
}

/// Registry order is the output order and the trigger priority.
pub static FIELD_REGISTRY: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
    use field_names::*;
    vec![
        spec(
            DATA_COLLECTED,
            ValueShape::List,
            &[
                r"수집.{0,5}항목",
                r"수집하는\s*개인정보",
                r"개인정보\s*항목",
                r"수집.{0,5}정보",
                r"처리하는.{0,5}개인정보",
            ],
        ),
        spec(
            PURPOSES,
            ValueShape::List,
            &[
                r"이용\s*목적",
                r"수집.{0,5}목적",
                r"처리\s*목적",
                r"개인정보.{0,5}목적",
                r"목적.{0,5}이용",
            ],
        ),
        spec(
            RETENTION,
            ValueShape::Scalar,
            &[
                r"보유.{0,5}기간",
                r"보관.{0,5}기간",
                r"이용\s*기간",
                r"보존.{0,5}기간",
                r"보유.{0,5}이용\s*기간",
            ],
        ),
        spec(
            THIRD_PARTY,
            ValueShape::List,
            &[
                r"제3자\s*제공",
                r"제삼자",
                r"개인정보.{0,5}제공",
                r"위탁",
                r"제공받는\s*자",
            ],
        ),
        spec(
            OVERSEAS_TRANSFER,
            ValueShape::Scalar,
            &[
                r"국외\s*이전",
                r"해외\s*이전",
                r"국외\s*제공",
                r"해외\s*서버",
                r"국외\s*보관",
            ],
        ),
        spec(
            REVOKE_PATH,
            ValueShape::Scalar,
            &[
                r"동의\s*철회",
                r"철회",
                r"거부.{0,5}권리",
                r"삭제\s*요청",
                r"파기\s*요청",
                r"동의\s*거부",
            ],
        ),
    ]
});

fn spec(name: &'static str, shape: ValueShape, patterns: &[&str]) -> FieldSpec {
    FieldSpec {
        name,
        shape,
        triggers: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("Invalid field trigger pattern"))
            .collect(),
    }
}

/// True if `line` matches a trigger of any field other than `current`.
pub fn is_section_boundary(line: &str, current: &str) -> bool {
    FIELD_REGISTRY
        .iter()
        .filter(|spec| spec.name != current)
        .any(|spec| spec.triggers.iter().any(|t| t.is_match(line)))
}
