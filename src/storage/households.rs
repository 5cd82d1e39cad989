//! Household repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::HousesplitError;
use crate::models::{Household, HouseholdId, MemberId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct HouseholdData {
    households: Vec<Household>,
}

/// Repository for household persistence
pub struct HouseholdRepository {
    path: PathBuf,
    data: RwLock<HashMap<HouseholdId, Household>>,
}

impl HouseholdRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<HouseholdId, Household>>, HousesplitError> {
        self.data
            .read()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<HouseholdId, Household>>, HousesplitError> {
        self.data
            .write()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load households from disk
    pub fn load(&self) -> Result<(), HousesplitError> {
        let file_data: HouseholdData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        for household in file_data.households {
            data.insert(household.id, household);
        }

        Ok(())
    }

    /// Save households to disk, oldest first
    pub fn save(&self) -> Result<(), HousesplitError> {
        let mut households: Vec<_> = self.read()?.values().cloned().collect();
        households.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        write_json_atomic(&self.path, &HouseholdData { households })
    }

    pub fn get(&self, id: HouseholdId) -> Result<Option<Household>, HousesplitError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All households, ordered by name (case-insensitive)
    pub fn get_all(&self) -> Result<Vec<Household>, HousesplitError> {
        let mut households: Vec<_> = self.read()?.values().cloned().collect();
        households.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(households)
    }

    /// Households whose name matches exactly (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Household>, HousesplitError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|h| h.name.to_lowercase() == needle)
            .collect())
    }

    /// Households the given member belongs to
    pub fn for_member(&self, member_id: MemberId) -> Result<Vec<Household>, HousesplitError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|h| h.has_member(member_id))
            .collect())
    }

    /// Insert or update a household
    pub fn upsert(&self, household: Household) -> Result<(), HousesplitError> {
        self.write()?.insert(household.id, household);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, HousesplitError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, HouseholdRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = HouseholdRepository::new(temp_dir.path().join("households.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let household = Household::new("Flat 3B", MemberId::new());
        repo.upsert(household.clone()).unwrap();

        let found = repo.get(household.id).unwrap().unwrap();
        assert_eq!(found.name, "Flat 3B");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        let creator = MemberId::new();
        repo.upsert(Household::new("cabin", creator)).unwrap();
        repo.upsert(Household::new("Apartment", creator)).unwrap();
        repo.upsert(Household::new("Beach House", creator)).unwrap();

        let names: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["Apartment", "Beach House", "cabin"]);
    }

    #[test]
    fn test_for_member() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = MemberId::new();
        let bob = MemberId::new();

        let mut shared = Household::new("Shared", alice);
        shared.add_member(bob);
        repo.upsert(shared).unwrap();
        repo.upsert(Household::new("Alice only", alice)).unwrap();

        assert_eq!(repo.for_member(alice).unwrap().len(), 2);
        assert_eq!(repo.for_member(bob).unwrap().len(), 1);
        assert!(repo.for_member(MemberId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Household::new("Flat 3B", MemberId::new()))
            .unwrap();

        assert_eq!(repo.find_by_name("flat 3b").unwrap().len(), 1);
        assert!(repo.find_by_name("Flat 4").unwrap().is_empty());
    }

    #[test]
    fn test_save_preserves_join_order() {
        let (temp_dir, repo) = create_test_repo();
        let members: Vec<_> = (0..4).map(|_| MemberId::new()).collect();
        let mut household = Household::new("Flat", members[0]);
        for id in &members[1..] {
            household.add_member(*id);
        }
        repo.upsert(household.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = HouseholdRepository::new(temp_dir.path().join("households.json"));
        reloaded.load().unwrap();
        assert_eq!(
            reloaded.get(household.id).unwrap().unwrap().member_ids,
            members
        );
    }
}
