//! Summary service
//!
//! Assembles a household snapshot from storage, runs the settlement engine,
//! and packages balances and transfers for display or export.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{HousesplitError, HousesplitResult};
use crate::models::{round_cents, Balance, Household, HouseholdId, Member, MonthFilter, Transfer};
use crate::settlement;
use crate::storage::Storage;

use super::{ExpenseService, HouseholdService};

/// Balances and settlement plan for one household
#[derive(Debug, Clone, Serialize)]
pub struct HouseholdSummary {
    pub household: Household,
    /// Month the summary is restricted to, if any
    pub period: Option<MonthFilter>,
    pub members_count: usize,
    pub expenses_count: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    pub members: Vec<Member>,
    pub balances: Vec<Balance>,
    pub settlements: Vec<Transfer>,
}

/// Service for computing household summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Compute balances and the settlement plan for a household
    pub fn summarize(
        &self,
        household_id: HouseholdId,
        period: Option<MonthFilter>,
    ) -> HousesplitResult<HouseholdSummary> {
        let households = HouseholdService::new(self.storage);
        let household = households
            .get(household_id)?
            .ok_or_else(|| HousesplitError::household_not_found(household_id.to_string()))?;

        let members = households.members(&household)?;
        // Nothing to split without members; the summary is empty
        let expenses = if members.is_empty() {
            Vec::new()
        } else {
            ExpenseService::new(self.storage).expenses_for(household.id, period)?
        };

        let result = settlement::settle(&members, &expenses)?;
        let total_spent = round_cents(expenses.iter().map(|e| e.amount.to_decimal()).sum());

        debug!(
            household = %household.id,
            members = members.len(),
            expenses = expenses.len(),
            transfers = result.transfers.len(),
            "computed settlement"
        );

        Ok(HouseholdSummary {
            period,
            members_count: members.len(),
            expenses_count: expenses.len(),
            total_spent,
            balances: result.balances,
            settlements: result.transfers,
            members,
            household,
        })
    }
}
