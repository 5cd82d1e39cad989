//! Balance and transfer results
//!
//! These are computed by the settlement engine, returned to the caller and
//! never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::member::Member;

/// One member's position across a set of expenses
///
/// All amounts are rounded to 2 decimal places. A positive `net` means the
/// member is owed money, a negative `net` means they owe money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub member: Member,

    /// Total this member paid
    #[serde(with = "rust_decimal::serde::float")]
    pub paid: Decimal,

    /// This member's equal share of all expenses
    #[serde(with = "rust_decimal::serde::float")]
    pub owed: Decimal,

    /// `paid - owed`, rounded from the unrounded difference
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
}

/// A single payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Member,
    pub to: Member,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
