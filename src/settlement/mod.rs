//! Balance aggregation and debt settlement
//!
//! The engine is a pair of pure functions over an in-memory snapshot:
//!
//! - [`aggregate`] folds a household's expenses into one [`Balance`] per
//!   member, splitting every expense equally across all members.
//! - [`plan`] turns those balances into an ordered list of [`Transfer`]s that
//!   brings every member back to zero, pairing the largest debtor with the
//!   largest creditor first.
//!
//! [`settle`] runs both and treats an empty household as "nothing to settle".
//! Nothing here touches storage, logs, or holds state between calls.

mod aggregator;
mod planner;

pub use aggregator::aggregate;
pub use planner::{plan, MIN_TRANSFER, SETTLED_EPSILON};

use serde::{Deserialize, Serialize};

use crate::models::{Balance, Expense, ExpenseId, Member, MemberId, Money, Transfer};

/// Failures the engine reports to its caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    /// No members, so there is no per-capita share to compute
    #[error("Household has no members")]
    EmptyHousehold,

    /// An expense names a payer who is not in the member snapshot
    #[error("Expense {expense_id} was paid by {payer_id}, who is not a member of the household")]
    ReferentialIntegrity {
        expense_id: ExpenseId,
        payer_id: MemberId,
    },

    /// An expense amount is zero or negative
    #[error("Expense {expense_id} has a non-positive amount ({amount})")]
    InvalidAmount { expense_id: ExpenseId, amount: Money },

    /// The member snapshot lists the same member twice
    #[error("Member {0} appears more than once in the household")]
    DuplicateMember(MemberId),
}

/// Balances plus the transfers that settle them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub balances: Vec<Balance>,
    pub transfers: Vec<Transfer>,
}

/// Aggregate then plan
///
/// An empty member set yields an empty settlement. Every other engine error
/// is returned unchanged.
pub fn settle(members: &[Member], expenses: &[Expense]) -> Result<Settlement, SettlementError> {
    let balances = match aggregate(members, expenses) {
        Ok(balances) => balances,
        Err(SettlementError::EmptyHousehold) => return Ok(Settlement::default()),
        Err(e) => return Err(e),
    };
    let transfers = plan(&balances);

    Ok(Settlement {
        balances,
        transfers,
    })
}
