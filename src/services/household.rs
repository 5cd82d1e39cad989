//! Household service
//!
//! Creating households, joining them, and resolving their members.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::{Household, HouseholdId, Member, MemberId};
use crate::storage::Storage;

/// Service for household management
pub struct HouseholdService<'a> {
    storage: &'a Storage,
}

impl<'a> HouseholdService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a household with `creator` as its first member
    pub fn create(&self, name: &str, creator: &Member) -> HousesplitResult<Household> {
        let household = Household::new(name.trim(), creator.id);
        household
            .validate()
            .map_err(|e| HousesplitError::Validation(e.to_string()))?;

        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_create(
            EntityType::Household,
            household.id.to_full_string(),
            Some(household.name.clone()),
            &household,
        )?;

        info!(household = %household.id, name = %household.name, creator = %creator.id, "created household");
        Ok(household)
    }

    /// Add a member to a household
    ///
    /// Joining a household twice is not an error; returns whether the
    /// membership changed.
    pub fn join(&self, household_id: HouseholdId, member: &Member) -> HousesplitResult<bool> {
        let before = self
            .storage
            .households
            .get(household_id)?
            .ok_or_else(|| HousesplitError::household_not_found(household_id.to_string()))?;

        let mut household = before.clone();
        if !household.add_member(member.id) {
            return Ok(false);
        }

        self.storage.households.upsert(household.clone())?;
        self.storage.households.save()?;

        self.storage.log_update(
            EntityType::Household,
            household.id.to_full_string(),
            Some(household.name.clone()),
            &before,
            &household,
            Some(format!("joined: {}", member.name)),
        )?;

        info!(household = %household.id, member = %member.id, "member joined household");
        Ok(true)
    }

    pub fn get(&self, id: HouseholdId) -> HousesplitResult<Option<Household>> {
        self.storage.households.get(id)
    }

    /// Find a household by name or id (full or short form)
    pub fn find(&self, identifier: &str) -> HousesplitResult<Option<Household>> {
        let identifier = identifier.trim();

        let mut by_name = self.storage.households.find_by_name(identifier)?;
        match by_name.len() {
            0 => {}
            1 => return Ok(by_name.pop()),
            n => {
                return Err(HousesplitError::Validation(format!(
                    "{} households are named '{}'; use the household id instead",
                    n, identifier
                )))
            }
        }

        if let Ok(id) = identifier.parse::<HouseholdId>() {
            return self.storage.households.get(id);
        }

        Ok(self
            .storage
            .households
            .get_all()?
            .into_iter()
            .find(|h| h.id.to_string() == identifier))
    }

    /// Like [`find`](Self::find), but a missing household is an error
    pub fn require(&self, identifier: &str) -> HousesplitResult<Household> {
        self.find(identifier)?
            .ok_or_else(|| HousesplitError::household_not_found(identifier))
    }

    /// All households, ordered by name
    pub fn list(&self) -> HousesplitResult<Vec<Household>> {
        self.storage.households.get_all()
    }

    /// Households the member belongs to
    pub fn list_for_member(&self, member_id: MemberId) -> HousesplitResult<Vec<Household>> {
        self.storage.households.for_member(member_id)
    }

    /// Member records of a household, in join order
    pub fn members(&self, household: &Household) -> HousesplitResult<Vec<Member>> {
        household
            .member_ids
            .iter()
            .map(|id| {
                self.storage
                    .members
                    .get(*id)?
                    .ok_or_else(|| HousesplitError::member_not_found(id.to_string()))
            })
            .collect()
    }

    /// Fail unless `member` belongs to `household`
    pub fn ensure_member(&self, household: &Household, member: &Member) -> HousesplitResult<()> {
        if household.has_member(member.id) {
            Ok(())
        } else {
            Err(HousesplitError::NotAMember {
                member: member.name.clone(),
                household: household.name.clone(),
            })
        }
    }
}
