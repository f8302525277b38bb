// LLM prompt constants for the Budget module.
// The model answers in plain text, NOT JSON: the section parser downstream
// tolerates loose formatting, so the prompt only pins the section convention.

use crate::models::trip::TripRequest;

/// System prompt for trip budget generation.
pub const BUDGET_SYSTEM: &str = "You are an expert travel budget planner. \
    Produce a realistic cost estimate for the requested trip. \
    Respond in plain text with these sections, in this order: \
    a 'Total Cost' line with the overall estimate, \
    a 'Cost Breakdown' section with one 'Category: amount' line per category, \
    a 'Money-Saving Tips' numbered list, \
    and a 'Sample Itinerary' section with one line per day. \
    Do NOT respond with JSON. Do NOT use markdown tables.";

/// Budget prompt template. Placeholders are filled by [`build_budget_prompt`].
pub const BUDGET_PROMPT_TEMPLATE: &str = r#"Create a travel budget estimate for the following trip.

Origin: {origin}
Destination: {destination}
Duration: {days} days
Travelers: {travelers}
Budget type: {budget_type}

Cover accommodation, food, transport (including getting there from the origin), and activities.
Give all amounts in USD, scaled to the number of travelers and the budget type."#;

/// Fills the budget prompt template from a validated trip request.
pub fn build_budget_prompt(request: &TripRequest) -> String {
    BUDGET_PROMPT_TEMPLATE
        .replace("{origin}", request.origin.trim())
        .replace("{destination}", request.destination.trim())
        .replace("{days}", &request.days.to_string())
        .replace("{travelers}", &request.travelers.to_string())
        .replace("{budget_type}", request.budget_type.label())
}
