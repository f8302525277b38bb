//! Budget generation pipeline.
//!
//! Flow: validate request -> build prompt -> LLM call -> section parse ->
//! assemble the render-ready view. The raw model text is returned alongside
//! the parsed view so the browser client keeps its original contract.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::budget::category::{classify, CategoryTag};
use crate::budget::prompts::{build_budget_prompt, BUDGET_SYSTEM};
use crate::budget::section_parser::parse;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::trip::TripRequest;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A breakdown entry enriched with its display classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub category: String,
    pub amount: String,
    pub tag: CategoryTag,
    pub icon: String,
}

/// Render-ready budget assembled from parsed sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetView {
    /// The recognized total line, or the first raw line when none was found.
    pub display_total: String,
    pub breakdown: Vec<BreakdownItem>,
    pub tips: Vec<String>,
    pub itinerary: String,
}

/// Response of the generation pipeline: raw model text plus its parsed view.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetResponse {
    pub result: String,
    pub budget: BudgetView,
}

impl BudgetView {
    /// Parses raw model text and classifies each breakdown entry.
    ///
    /// Cannot fail: the parser is total, and unstructured input degrades to
    /// a view whose only content is the first-line display total.
    pub fn from_raw(raw: &str) -> Self {
        let parsed = parse(raw);

        let display_total = if parsed.total_cost_line.is_empty() {
            raw.split('\n').next().unwrap_or_default().to_string()
        } else {
            parsed.total_cost_line
        };

        let breakdown = parsed
            .breakdown
            .into_iter()
            .map(|entry| {
                let tag = classify(&entry.category);
                BreakdownItem {
                    category: entry.category,
                    amount: entry.amount,
                    tag,
                    icon: tag.icon().to_string(),
                }
            })
            .collect();

        BudgetView {
            display_total,
            breakdown,
            tips: parsed.tips,
            itinerary: parsed.itinerary_text,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full budget pipeline for a trip request.
pub async fn generate_budget(
    llm: &LlmClient,
    request: TripRequest,
) -> Result<BudgetResponse, AppError> {
    request.validate()?;

    info!(
        "Generating budget: {} -> {} ({} days, {} travelers, {})",
        request.origin.trim(),
        request.destination.trim(),
        request.days,
        request.travelers,
        request.budget_type.label()
    );

    let prompt = build_budget_prompt(&request);
    let raw = llm
        .call_text(&prompt, BUDGET_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Budget generation failed: {e}")))?;

    let budget = BudgetView::from_raw(&raw);
    info!(
        "Parsed budget: total_found={}, {} breakdown entries, {} tips",
        !budget.display_total.is_empty(),
        budget.breakdown.len(),
        budget.tips.len()
    );

    Ok(BudgetResponse {
        result: raw,
        budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = "\
Total Cost: $2,450 for 2 travelers

Cost Breakdown
1. Accommodation: $800
2. Food: $400
3. Flights - $900
4. Activities: $350

Money-Saving Tips
1. Book flights early
2. Use public transit

Sample Itinerary
Day 1: Arrive and check in
Day 2: City walking tour";

    #[test]
    fn test_view_from_well_formed_response() {
        let view = BudgetView::from_raw(SAMPLE_RESPONSE);

        assert_eq!(view.display_total, "Total Cost: $2,450 for 2 travelers");
        assert_eq!(view.breakdown.len(), 4);
        assert_eq!(view.breakdown[0].tag, CategoryTag::Lodging);
        assert_eq!(view.breakdown[0].icon, "home");
        assert_eq!(view.breakdown[1].tag, CategoryTag::Food);
        assert_eq!(view.breakdown[2].tag, CategoryTag::Transport);
        assert_eq!(view.breakdown[3].tag, CategoryTag::Activities);
        assert_eq!(view.tips.len(), 2);
        assert!(view.itinerary.ends_with('\n'));
    }

    #[test]
    fn test_display_total_falls_back_to_first_raw_line() {
        let view = BudgetView::from_raw("Roughly $1,200 all in.\nNo sections here.");
        assert_eq!(view.display_total, "Roughly $1,200 all in.");
        assert!(view.breakdown.is_empty());
        assert!(view.tips.is_empty());
        assert!(view.itinerary.is_empty());
    }

    #[test]
    fn test_view_from_empty_input_is_all_empty() {
        let view = BudgetView::from_raw("");
        assert_eq!(view.display_total, "");
        assert!(view.breakdown.is_empty());
    }

    #[test]
    fn test_unmatched_category_gets_generic_icon() {
        let view = BudgetView::from_raw("Breakdown\nMiscellaneous: $50");
        assert_eq!(view.breakdown[0].tag, CategoryTag::Generic);
        assert_eq!(view.breakdown[0].icon, "dollar-sign");
    }

    #[test]
    fn test_budget_response_serializes_raw_and_view() {
        let response = BudgetResponse {
            result: SAMPLE_RESPONSE.to_string(),
            budget: BudgetView::from_raw(SAMPLE_RESPONSE),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["result"].as_str().unwrap().contains("Total Cost"));
        assert_eq!(json["budget"]["breakdown"][0]["icon"], "home");
        assert_eq!(json["budget"]["breakdown"][0]["tag"], "Lodging");
    }
}
