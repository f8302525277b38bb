//! Section parser. Turns the free-text response of the budgeting model into
//! typed sections: total cost line, categorized breakdown, tips, itinerary.
//!
//! The model answers in a loose convention (headings, labeled lines,
//! delimiter-separated pairs), not a schema. This parser is the tolerance
//! layer: it never fails, and unrecognized structure degrades to empty
//! fields. Callers fall back to the first raw line when no total was found.

use serde::{Deserialize, Serialize};

/// A single `category: amount` pair extracted under the Breakdown section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: String,
    pub amount: String,
}

/// Structured output of [`parse`]. Empty strings and empty vecs mean
/// "not found" for their section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBudget {
    /// The last line that matched the Total heading, verbatim after trim.
    pub total_cost_line: String,
    /// Insertion-ordered; categories are not deduplicated.
    pub breakdown: Vec<BreakdownEntry>,
    pub tips: Vec<String>,
    /// Trimmed itinerary lines rejoined with `\n`, newline-terminated.
    pub itinerary_text: String,
}

/// The currently active section. One cursor, reassigned on each heading
/// match. Lines before the first heading fall under `None` and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Total,
    Breakdown,
    Tips,
    Itinerary,
}

/// Classifies a trimmed line as a heading, if it is one.
///
/// Case-insensitive substring match, fixed priority order, first match wins:
/// 1. "total" + "cost" -> Total
/// 2. "breakdown" | "stay" -> Breakdown
/// 3. "tip" | "saving" -> Tips
/// 4. "itinerary" -> Itinerary
pub fn detect_heading(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    if lower.contains("total") && lower.contains("cost") {
        Some(Section::Total)
    } else if lower.contains("breakdown") || lower.contains("stay") {
        Some(Section::Breakdown)
    } else if lower.contains("tip") || lower.contains("saving") {
        Some(Section::Tips)
    } else if lower.contains("itinerary") {
        Some(Section::Itinerary)
    } else {
        None
    }
}

/// Strips a leading list ordinal: one or more digits, an optional period,
/// then any whitespace. Lines without a leading digit pass through untouched.
pub fn strip_ordinal_prefix(s: &str) -> &str {
    let after_digits = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == s.len() {
        return s;
    }
    after_digits
        .strip_prefix('.')
        .unwrap_or(after_digits)
        .trim_start()
}

/// Parses a raw model response into its budget sections.
///
/// Single left-to-right pass. Each line is trimmed, checked against the
/// heading rules, and otherwise accumulated into the active section.
/// Total and `None` sections have no line accumulator: under them,
/// non-heading lines are ignored.
pub fn parse(text: &str) -> ParsedBudget {
    let mut parsed = ParsedBudget::default();
    let mut section = Section::None;

    for line in text.split('\n') {
        let trimmed = line.trim();

        if let Some(heading) = detect_heading(trimmed) {
            section = heading;
            if heading == Section::Total {
                // Last Total heading wins; pure overwrite, no accumulation.
                parsed.total_cost_line = trimmed.to_string();
            }
            continue;
        }

        if trimmed.is_empty() {
            // Blank lines are skipped but do not reset the section.
            continue;
        }

        match section {
            Section::Breakdown => {
                if trimmed.contains(':') || trimmed.contains('-') {
                    // Splits on EVERY ':' and '-', so a hyphen inside the
                    // category name truncates it at the first delimiter.
                    // Known fragility of the heuristic, kept for
                    // compatibility with observed output.
                    let parts: Vec<&str> =
                        trimmed.split(|c| c == ':' || c == '-').collect();
                    if parts.len() >= 2 {
                        parsed.breakdown.push(BreakdownEntry {
                            category: strip_ordinal_prefix(parts[0].trim())
                                .replace(['*', '#'], ""),
                            amount: parts[1..].join(":").trim().replace(['*', '#'], ""),
                        });
                    }
                }
            }
            Section::Tips => {
                // Pushed even when stripping leaves an empty string.
                parsed.tips.push(
                    strip_ordinal_prefix(trimmed)
                        .replace(['*', '#', '-'], "")
                        .trim()
                        .to_string(),
                );
            }
            Section::Itinerary => {
                parsed.itinerary_text.push_str(trimmed);
                parsed.itinerary_text.push('\n');
            }
            Section::Total | Section::None => {}
        }
    }

    parsed
}
