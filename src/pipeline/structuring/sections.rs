use std::collections::HashSet;

use super::registry::{is_section_boundary, FieldSpec};

/// A contiguous block of the document attributed to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Non-blank trimmed lines of the block, newline-joined.
    pub text: String,
    /// 1-based line of the trigger match.
    pub start_line: usize,
    /// 1-based last non-blank line of the block.
    pub end_line: usize,
}

/// Find the sections for one field.
///
/// Each trigger claims its first matching line that no earlier trigger of
/// this field already started on. The section grows downward until
/// `max_blank_lines` consecutive blank lines, or a line that triggers a
/// different field.
pub fn find_sections(lines: &[&str], spec: &FieldSpec, max_blank_lines: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut used_starts: HashSet<usize> = HashSet::new();

    for trigger in &spec.triggers {
        let Some(start) = (0..lines.len())
            .find(|idx| !used_starts.contains(idx) && trigger.is_match(lines[*idx]))
        else {
            continue;
        };

        let mut end = start + 1;
        let mut last_content = start;
        let mut consecutive_blank = 0;

        while end < lines.len() {
            let stripped = lines[end].trim();
            if stripped.is_empty() {
                consecutive_blank += 1;
                if consecutive_blank >= max_blank_lines {
                    break;
                }
                end += 1;
                continue;
            }
            consecutive_blank = 0;
            if is_section_boundary(stripped, spec.name) {
                break;
            }
            last_content = end;
            end += 1;
        }

        let block = lines[start..end]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if !block.is_empty() {
            sections.push(Section {
                text: block,
                start_line: start + 1,
                end_line: last_content + 1,
            });
            used_starts.insert(start);
        }
    }

    sections
}
