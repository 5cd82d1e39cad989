//! Balance aggregation
//!
//! Folds expenses into per-member balances. Every expense is split equally
//! across every member in the snapshot, including the payer and including
//! members who joined after the expense date.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::SettlementError;
use crate::models::{round_cents, Balance, Expense, Member};

/// Members plus each expense resolved to its payer's index
struct Snapshot<'a> {
    members: &'a [Member],
    charges: Vec<(usize, Decimal)>,
}

impl<'a> Snapshot<'a> {
    fn build(members: &'a [Member], expenses: &[Expense]) -> Result<Self, SettlementError> {
        if members.is_empty() {
            return Err(SettlementError::EmptyHousehold);
        }

        let mut index = HashMap::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            if index.insert(member.id, i).is_some() {
                return Err(SettlementError::DuplicateMember(member.id));
            }
        }

        let charges = expenses
            .iter()
            .map(|expense| {
                if !expense.amount.is_positive() {
                    return Err(SettlementError::InvalidAmount {
                        expense_id: expense.id,
                        amount: expense.amount,
                    });
                }
                let payer = index.get(&expense.payer_id).copied().ok_or(
                    SettlementError::ReferentialIntegrity {
                        expense_id: expense.id,
                        payer_id: expense.payer_id,
                    },
                )?;
                Ok((payer, expense.amount.to_decimal()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { members, charges })
    }
}

/// Unrounded totals, indexed like the member snapshot
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Totals {
    pub paid: Vec<Decimal>,
    /// Per-member share; identical for every member under an equal split
    pub share: Decimal,
}

fn accumulate(snapshot: &Snapshot<'_>) -> Totals {
    let (paid, total) = snapshot.charges.iter().fold(
        (vec![Decimal::ZERO; snapshot.members.len()], Decimal::ZERO),
        |(mut paid, total), &(payer, amount)| {
            paid[payer] += amount;
            (paid, total + amount)
        },
    );
    let share = total / Decimal::from(snapshot.members.len());

    Totals { paid, share }
}

/// Compute one balance per member, in member order
///
/// `paid`, `owed` and `net` are rounded once each, after accumulation.
///
/// # Errors
///
/// - [`SettlementError::EmptyHousehold`] if `members` is empty
/// - [`SettlementError::DuplicateMember`] if a member id repeats
/// - [`SettlementError::InvalidAmount`] if an expense amount is not positive
/// - [`SettlementError::ReferentialIntegrity`] if a payer is not in `members`
pub fn aggregate(
    members: &[Member],
    expenses: &[Expense],
) -> Result<Vec<Balance>, SettlementError> {
    let snapshot = Snapshot::build(members, expenses)?;
    let totals = accumulate(&snapshot);

    Ok(snapshot
        .members
        .iter()
        .zip(&totals.paid)
        .map(|(member, &paid)| Balance {
            member: member.clone(),
            paid: round_cents(paid),
            owed: round_cents(totals.share),
            net: round_cents(paid - totals.share),
        })
        .collect())
}

#[cfg(test)]
pub(crate) fn unrounded_totals(
    members: &[Member],
    expenses: &[Expense],
) -> Result<Totals, SettlementError> {
    Snapshot::build(members, expenses).map(|snapshot| accumulate(&snapshot))
}
