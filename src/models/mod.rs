//! Core data models for housesplit
//!
//! Persisted entities (households, members, expenses) plus the computed
//! balance and transfer types returned by the settlement engine.

pub mod balance;
pub mod expense;
pub mod household;
pub mod ids;
pub mod member;
pub mod money;
pub mod period;

pub use balance::{Balance, Transfer};
pub use expense::{Expense, ExpenseValidationError};
pub use household::{Household, HouseholdValidationError};
pub use ids::{ExpenseId, HouseholdId, MemberId};
pub use member::{Member, MemberValidationError};
pub use money::{format_amount, round_cents, Money, MoneyParseError};
pub use period::{MonthFilter, PeriodParseError};
