//! Typed identifiers for households, members and expenses
//!
//! Each identifier wraps a UUID so that a member id can never be passed where
//! a household id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Full, unabbreviated form (prefix + complete UUID)
            pub fn to_full_string(&self) -> String {
                format!("{}{}", $prefix, self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Short form used in listings: prefix + first 8 hex digits
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, &self.0.simple().to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(HouseholdId, "hh-");
define_id!(MemberId, "mem-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_creation() {
        let id = MemberId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = HouseholdId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("hh-"));
        assert_eq!(display.len(), 11); // "hh-" + 8 chars
    }

    #[test]
    fn test_from_str_accepts_prefixed_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = format!("exp-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let bare: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(bare, id);
    }

    #[test]
    fn test_full_string_round_trips() {
        let id = HouseholdId::new();
        let parsed: HouseholdId = id.to_full_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_short_display_does_not_parse() {
        // The display form is truncated and cannot round-trip to an ID
        let id = MemberId::new();
        assert!(id.to_string().parse::<MemberId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = MemberId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: MemberId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
