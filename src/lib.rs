//! housesplit - shared household expenses and settle-up plans
//!
//! Members share households, record who paid for what, and get back each
//! member's balance plus a short list of transfers that settles everyone up.
//!
//! # Architecture
//!
//! - `settlement`: the pure engine (balance aggregation and transfer planning)
//! - `models`: data models (members, households, expenses, money, balances)
//! - `config`: path and settings management
//! - `error`: custom error types
//! - `storage`: JSON file storage layer
//! - `audit`: append-only audit log
//! - `services`: business logic on top of storage
//! - `display`, `export`: terminal tables and file exports
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use housesplit::models::{Expense, HouseholdId, Member, Money};
//! use housesplit::settlement::settle;
//!
//! let alice = Member::new("Alice", "alice@example.com");
//! let bob = Member::new("Bob", "bob@example.com");
//! let dinner = Expense::new(
//!     HouseholdId::new(),
//!     alice.id,
//!     Money::from_cents(5000),
//!     chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
//! );
//!
//! let result = settle(&[alice, bob], &[dinner]).unwrap();
//! assert_eq!(result.transfers.len(), 1);
//! assert_eq!(result.transfers[0].from.name, "Bob");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod settlement;
pub mod storage;

pub use error::{HousesplitError, HousesplitResult};
