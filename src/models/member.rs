//! Member model
//!
//! A member is a verified identity (name and email) that can belong to any
//! number of households.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A household member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Email address (unique across members, compared case-insensitively)
    pub email: String,

    /// When the member was registered
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }

    /// Normalize an email for lookups
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(MemberValidationError::NameTooLong(self.name.len()));
        }

        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid_email {
            return Err(MemberValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberValidationError {
    #[error("Member name cannot be empty")]
    EmptyName,
    #[error("Member name too long ({0} chars, max 100)")]
    NameTooLong(usize),
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}
