//! Household model
//!
//! A household is a named group of members who share expenses and settle up
//! together. Membership is kept in join order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{HouseholdId, MemberId};

/// A group of members sharing expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier
    pub id: HouseholdId,

    /// Household name (e.g., "Flat 3B")
    pub name: String,

    /// Member ids in the order they joined
    #[serde(default)]
    pub member_ids: Vec<MemberId>,

    /// When the household was created
    pub created_at: DateTime<Utc>,

    /// When membership last changed
    pub updated_at: DateTime<Utc>,
}

impl Household {
    /// Create a new household with its creator as the first member
    pub fn new(name: impl Into<String>, creator: MemberId) -> Self {
        let now = Utc::now();
        Self {
            id: HouseholdId::new(),
            name: name.into(),
            member_ids: vec![creator],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_member(&self, member_id: MemberId) -> bool {
        self.member_ids.contains(&member_id)
    }

    /// Add a member, returning false if they already belong
    pub fn add_member(&mut self, member_id: MemberId) -> bool {
        if self.has_member(member_id) {
            return false;
        }
        self.member_ids.push(member_id);
        self.updated_at = Utc::now();
        true
    }

    /// Validate the household
    pub fn validate(&self) -> Result<(), HouseholdValidationError> {
        if self.name.trim().is_empty() {
            return Err(HouseholdValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(HouseholdValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

/// Validation errors for households
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HouseholdValidationError {
    #[error("Household name cannot be empty")]
    EmptyName,
    #[error("Household name too long ({0} chars, max 100)")]
    NameTooLong(usize),
}
