//! Service layer for housesplit
//!
//! Business rules on top of the storage layer: validation, membership
//! checks, audit logging, and assembling engine input from stored data.

pub mod expense;
pub mod household;
pub mod identity;
pub mod member;
pub mod summary;

pub use expense::{CreateExpenseInput, ExpenseRow, ExpenseService};
pub use household::HouseholdService;
pub use identity::resolve_acting_member;
pub use member::MemberService;
pub use summary::{HouseholdSummary, SummaryService};
