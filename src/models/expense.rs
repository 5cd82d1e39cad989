//! Expense model
//!
//! An expense is a single dated payment made by one member on behalf of the
//! whole household.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, HouseholdId, MemberId};
use super::money::Money;

/// A shared expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Household the expense belongs to
    pub household_id: HouseholdId,

    /// Member who paid
    pub payer_id: MemberId,

    /// Amount paid (always positive)
    pub amount: Money,

    /// Optional description (e.g., "Groceries at Aldi")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional free-form category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Date the expense was incurred
    pub date: NaiveDate,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        household_id: HouseholdId,
        payer_id: MemberId,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            household_id,
            payer_id,
            amount,
            description: None,
            category: None,
            date,
            created_at: Utc::now(),
        }
    }

    /// Set the description, dropping blank values
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description);
        self
    }

    /// Set the category, dropping blank values
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = non_blank(category);
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if let Some(description) = &self.description {
            if description.len() > 255 {
                return Err(ExpenseValidationError::DescriptionTooLong(
                    description.len(),
                ));
            }
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Expense description too long ({0} chars, max 255)")]
    DescriptionTooLong(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            HouseholdId::new(),
            MemberId::new(),
            Money::from_cents(4250),
            date(2025, 3, 14),
        )
        .with_description(Some("  Groceries ".into()))
        .with_category(Some("   ".into()));

        assert_eq!(expense.description.as_deref(), Some("Groceries"));
        assert!(expense.category.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for cents in [0, -100] {
            let expense = Expense::new(
                HouseholdId::new(),
                MemberId::new(),
                Money::from_cents(cents),
                date(2025, 3, 14),
            );
            assert_eq!(
                expense.validate(),
                Err(ExpenseValidationError::NonPositiveAmount(Money::from_cents(
                    cents
                )))
            );
        }
    }

    #[test]
    fn test_serialization_skips_empty_optionals() {
        let expense = Expense::new(
            HouseholdId::new(),
            MemberId::new(),
            Money::from_cents(100),
            date(2025, 1, 1),
        );
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("\"date\":\"2025-01-01\""));
    }
}
