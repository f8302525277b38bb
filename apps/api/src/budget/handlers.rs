//! Axum route handlers for the Budget API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::budget::generator::{generate_budget, BudgetResponse, BudgetView};
use crate::errors::AppError;
use crate::models::trip::TripRequest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseTextResponse {
    pub budget: BudgetView,
}

/// POST /api/v1/budgets
///
/// Full pipeline: validate the trip request, call the budgeting model,
/// parse the response into sections, return raw text plus the parsed view.
pub async fn handle_generate_budget(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<BudgetResponse>, AppError> {
    let response = generate_budget(&state.llm, request).await?;
    Ok(Json(response))
}

/// POST /api/v1/budgets/parse
///
/// Parse-only preview: runs the section parser and classifier over a raw
/// text blob without any model call. Useful for inspecting how a response
/// will render.
pub async fn handle_parse_preview(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParseTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ParseTextResponse {
        budget: BudgetView::from_raw(&request.text),
    }))
}
