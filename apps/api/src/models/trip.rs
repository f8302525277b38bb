//! Trip request model. Mirrors the front-end form: origin, destination,
//! duration, party size, and budget tier. Validation bounds match the form's.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 365;
pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 50;

/// Spending level requested by the traveler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    Luxury,
}

impl BudgetTier {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Low => "Low",
            BudgetTier::Medium => "Medium",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

/// Request body for budget generation. Wire format is camelCase to match
/// the browser client (`budgetType`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub days: u32,
    pub travelers: u32,
    #[serde(default)]
    pub budget_type: BudgetTier,
}

impl TripRequest {
    /// Validates the request before any remote call is made.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.origin.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter your departure city".to_string(),
            ));
        }
        if self.destination.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a destination".to_string(),
            ));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(AppError::Validation(format!(
                "Days must be between {MIN_DAYS} and {MAX_DAYS}"
            )));
        }
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(AppError::Validation(format!(
                "Number of travelers must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}"
            )));
        }
        Ok(())
    }
}
