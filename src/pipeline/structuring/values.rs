use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::Evidence;

use super::sections::Section;

static LIST_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,，、·\n]").expect("Invalid list separator pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\-·•■□●○▶▷]\s*").expect("Invalid bullet pattern"));
static NUM_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s*").expect("Invalid number prefix pattern"));

const ELLIPSIS: char = '…';

/// Split a merged block into list items.
///
/// Separators: commas (ASCII and full-width), ideographic comma, middle dot,
/// newline. Bullets and `1.` / `1)` prefixes are stripped; entries of one
/// character or less are dropped; duplicates keep their first position.
/// Falls back to the whole trimmed block when nothing survives.
pub fn extract_list_items(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let items: Vec<String> = LIST_SEP
        .split(text)
        .map(|item| {
            let item = BULLET.replace(item.trim(), "");
            NUM_PREFIX.replace(&item, "").trim().to_string()
        })
        .filter(|item| item.chars().count() > 1)
        .filter(|item| seen.insert(item.clone()))
        .collect();

    if items.is_empty() {
        vec![text.trim().to_string()]
    } else {
        items
    }
}

/// Build the evidence entry quoting one section.
pub fn section_evidence(section: &Section, max_lines: usize, max_chars: usize) -> Evidence {
    let quote = section
        .text
        .split('\n')
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ");
    Evidence::at_lines(
        truncate_chars(&quote, max_chars),
        section.start_line,
        section.end_line,
    )
}

/// Cut to `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_mixed_separators() {
        let items = extract_list_items("이름, 이메일·전화번호、주소，생년월일");
        assert_eq!(items, vec!["이름", "이메일", "전화번호", "주소", "생년월일"]);
    }

    #[test]
    fn strips_bullets_and_numbering() {
        let items = extract_list_items("- 이름\n• 이메일\n1. 전화번호\n2) 주소");
        assert_eq!(items, vec!["이름", "이메일", "전화번호", "주소"]);
    }

    #[test]
    fn drops_single_character_entries() {
        let items = extract_list_items("이름, 외, , 이메일");
        assert_eq!(items, vec!["이름", "이메일"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let items = extract_list_items("이름, 이메일\n이름");
        assert_eq!(items, vec!["이름", "이메일"]);
    }

    #[test]
    fn falls_back_to_whole_block() {
        assert_eq!(extract_list_items(" a, b "), vec!["a, b"]);
    }

    #[test]
    fn evidence_joins_first_three_lines() {
        let section = Section {
            text: "수집항목:\n이름\n이메일\n전화번호".into(),
            start_line: 2,
            end_line: 5,
        };
        let ev = section_evidence(&section, 3, 200);
        assert_eq!(ev.quote, "수집항목: 이름 이메일");
        assert_eq!(ev.location, "lines 2-5");
    }

    #[test]
    fn evidence_single_line_location() {
        let section = Section {
            text: "보유기간: 1년".into(),
            start_line: 7,
            end_line: 7,
        };
        assert_eq!(section_evidence(&section, 3, 200).location, "line 7");
    }

    #[test]
    fn long_quote_truncated_with_ellipsis() {
        let long = "가".repeat(250);
        let cut = truncate_chars(&long, 200);
        assert_eq!(cut.chars().count(), 201);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_chars("짧은 문장", 200), "짧은 문장");
    }
}
