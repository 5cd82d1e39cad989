//! Expense service
//!
//! Recording shared expenses and listing them with payer names.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::{Expense, HouseholdId, MemberId, Money, MonthFilter};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub household_id: HouseholdId,
    pub payer_id: MemberId,
    pub amount: Money,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Defaults to today when omitted
    pub date: Option<NaiveDate>,
}

/// An expense together with its payer's display name
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseRow {
    #[serde(flatten)]
    pub expense: Expense,
    pub payer_name: String,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense paid by a household member
    pub fn add(&self, input: CreateExpenseInput) -> HousesplitResult<Expense> {
        let household = self
            .storage
            .households
            .get(input.household_id)?
            .ok_or_else(|| HousesplitError::household_not_found(input.household_id.to_string()))?;

        let payer = self
            .storage
            .members
            .get(input.payer_id)?
            .ok_or_else(|| HousesplitError::member_not_found(input.payer_id.to_string()))?;

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let expense = Expense::new(household.id, payer.id, input.amount, date)
            .with_description(input.description)
            .with_category(input.category);

        expense
            .validate()
            .map_err(|e| HousesplitError::Validation(e.to_string()))?;

        if !household.has_member(payer.id) {
            return Err(HousesplitError::NotAMember {
                member: payer.name,
                household: household.name,
            });
        }

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_full_string(),
            expense.description.clone(),
            &expense,
        )?;

        info!(
            expense = %expense.id,
            household = %household.id,
            payer = %payer.id,
            amount = %expense.amount,
            "recorded expense"
        );
        Ok(expense)
    }

    /// Expenses of a household, optionally restricted to one month
    pub fn expenses_for(
        &self,
        household_id: HouseholdId,
        filter: Option<MonthFilter>,
    ) -> HousesplitResult<Vec<Expense>> {
        let expenses = self.storage.expenses.get_by_household(household_id)?;
        Ok(match filter {
            Some(month) => expenses
                .into_iter()
                .filter(|e| month.contains(e.date))
                .collect(),
            None => expenses,
        })
    }

    /// Expenses of a household with payer names, newest first
    pub fn list(
        &self,
        household_id: HouseholdId,
        filter: Option<MonthFilter>,
    ) -> HousesplitResult<Vec<ExpenseRow>> {
        self.expenses_for(household_id, filter)?
            .into_iter()
            .map(|expense| {
                let payer_name = self
                    .storage
                    .members
                    .get(expense.payer_id)?
                    .map(|m| m.name)
                    .unwrap_or_else(|| expense.payer_id.to_string());
                Ok(ExpenseRow {
                    expense,
                    payer_name,
                })
            })
            .collect()
    }
}
