//! Append-only audit trail
//!
//! Every household, member and expense mutation is appended to `audit.log`
//! as one JSON object per line. The log is never rewritten.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
