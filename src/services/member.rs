//! Member service
//!
//! Registration and lookup of member identities.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::{Member, MemberId};
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new member identity
    pub fn register(&self, name: &str, email: &str) -> HousesplitResult<Member> {
        let member = Member::new(name.trim(), email.trim());
        member
            .validate()
            .map_err(|e| HousesplitError::Validation(e.to_string()))?;

        if self.storage.members.get_by_email(&member.email)?.is_some() {
            return Err(HousesplitError::Duplicate {
                entity_type: "Member",
                identifier: member.email.clone(),
            });
        }

        self.storage.members.upsert(member.clone())?;
        self.storage.members.save()?;

        self.storage.log_create(
            EntityType::Member,
            member.id.to_full_string(),
            Some(member.name.clone()),
            &member,
        )?;

        info!(member = %member.id, name = %member.name, "registered member");
        Ok(member)
    }

    pub fn get(&self, id: MemberId) -> HousesplitResult<Option<Member>> {
        self.storage.members.get(id)
    }

    /// Find a member by email, name, or id (full or short form)
    ///
    /// A name shared by several members is rejected as ambiguous.
    pub fn find(&self, identifier: &str) -> HousesplitResult<Option<Member>> {
        let identifier = identifier.trim();

        if identifier.contains('@') {
            return self.storage.members.get_by_email(identifier);
        }

        let mut by_name = self.storage.members.find_by_name(identifier)?;
        match by_name.len() {
            0 => {}
            1 => return Ok(by_name.pop()),
            n => {
                return Err(HousesplitError::Validation(format!(
                    "{} members are named '{}'; use an email or id instead",
                    n, identifier
                )))
            }
        }

        if let Ok(id) = identifier.parse::<MemberId>() {
            return self.storage.members.get(id);
        }

        Ok(self
            .storage
            .members
            .get_all()?
            .into_iter()
            .find(|m| m.id.to_string() == identifier))
    }

    /// Like [`find`](Self::find), but a missing member is an error
    pub fn require(&self, identifier: &str) -> HousesplitResult<Member> {
        self.find(identifier)?
            .ok_or_else(|| HousesplitError::member_not_found(identifier))
    }

    /// All members, ordered by name
    pub fn list(&self) -> HousesplitResult<Vec<Member>> {
        self.storage.members.get_all()
    }
}
