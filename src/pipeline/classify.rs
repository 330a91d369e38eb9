//! Rule-based document-type classifier.
//!
//! Each document type owns an ordered list of weighted keyword patterns.
//! A pattern contributes its weight once, on the first line it matches;
//! that line becomes candidate evidence for the type.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DocumentType, Evidence};
use crate::pipeline_config::AnalysisConfig;

/// A compiled keyword pattern and the score it adds.
struct WeightedRule {
    regex: Regex,
    weight: u32,
}

struct TypeRules {
    doc_type: DocumentType,
    rules: Vec<WeightedRule>,
}

/// Declaration order is the tie-break: an earlier type wins equal scores.
static DOC_TYPE_RULES: LazyLock<Vec<TypeRules>> = LazyLock::new(|| {
    vec![
        type_rules(
            DocumentType::Consent,
            &[
                (r"동의서", 3),
                (r"개인정보\s*수집", 2),
                (r"개인정보.{0,5}이용", 2),
                (r"수집.{0,3}이용.{0,3}동의", 3),
                (r"동의합니다", 2),
                (r"동의\s*여부", 2),
                (r"필수\s*동의", 2),
                (r"선택\s*동의", 1),
            ],
        ),
        type_rules(
            DocumentType::Change,
            &[
                (r"변경\s*(?:사항|안내|내용)", 3),
                (r"개정\s*(?:사항|안내|내용)", 3),
                (r"업데이트", 2),
                (r"기존.{0,10}변경", 2),
                (r"신규\s*추가", 2),
                (r"정책\s*변경", 3),
            ],
        ),
        type_rules(
            DocumentType::Marketing,
            &[
                (r"마케팅", 3),
                (r"홍보", 2),
                (r"프로모션", 2),
                (r"광고", 2),
                (r"수신\s*동의", 3),
                (r"뉴스레터", 2),
                (r"이벤트\s*안내", 2),
            ],
        ),
        type_rules(
            DocumentType::ThirdParty,
            &[
                (r"제3자\s*제공", 3),
                (r"제삼자", 2),
                (r"개인정보.{0,5}제공", 2),
                (r"업무\s*위탁", 3),
                (r"처리\s*위탁", 3),
            ],
        ),
    ]
});

fn type_rules(doc_type: DocumentType, patterns: &[(&str, u32)]) -> TypeRules {
    TypeRules {
        doc_type,
        rules: patterns
            .iter()
            .map(|(pattern, weight)| WeightedRule {
                regex: Regex::new(&format!("(?i){pattern}"))
                    .expect("Invalid classifier regex pattern"),
                weight: *weight,
            })
            .collect(),
    }
}

/// Return the best-scoring document type and up to
/// `classifier_max_evidence` distinct evidence lines for it.
///
/// Scores below `classifier_min_score` yield `(Unknown, [])`.
pub fn classify(text: &str, config: &AnalysisConfig) -> (DocumentType, Vec<Evidence>) {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut best: Option<(DocumentType, u32, Vec<Evidence>)> = None;

    for type_rules in DOC_TYPE_RULES.iter() {
        let mut score = 0;
        let mut evidence = Vec::new();

        for rule in &type_rules.rules {
            if let Some((idx, line)) = lines
                .iter()
                .enumerate()
                .find(|(_, line)| rule.regex.is_match(line))
            {
                score += rule.weight;
                evidence.push(Evidence::at_line(line.trim(), idx + 1));
            }
        }

        tracing::trace!(doc_type = type_rules.doc_type.as_str(), score, "Type scored");

        // Strictly greater: ties keep the earlier-declared type.
        if best.as_ref().map_or(true, |(_, top, _)| score > *top) {
            best = Some((type_rules.doc_type, score, evidence));
        }
    }

    match best {
        Some((doc_type, score, evidence)) if score >= config.classifier_min_score => {
            (doc_type, dedup_evidence(evidence, config.classifier_max_evidence))
        }
        _ => (DocumentType::Unknown, Vec::new()),
    }
}

/// Drop evidence with a quote already seen, keep the first `cap`.
fn dedup_evidence(evidence: Vec<Evidence>, cap: usize) -> Vec<Evidence> {
    let mut seen = HashSet::new();
    evidence
        .into_iter()
        .filter(|ev| seen.insert(ev.quote.clone()))
        .take(cap)
        .collect()
}
