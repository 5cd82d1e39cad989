//! Storage layer for housesplit
//!
//! JSON files with atomic writes, one repository per entity, plus the
//! append-only audit log.

pub mod expenses;
pub mod file_io;
pub mod households;
pub mod init;
pub mod members;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use households::HouseholdRepository;
pub use init::initialize_storage;
pub use members::MemberRepository;

use serde::Serialize;
use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HousesplitPaths;
use crate::error::HousesplitError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: HousesplitPaths,
    pub households: HouseholdRepository,
    pub members: MemberRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: HousesplitPaths) -> Result<Self, HousesplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            households: HouseholdRepository::new(paths.households_file()),
            members: MemberRepository::new(paths.members_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &HousesplitPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), HousesplitError> {
        self.households.load()?;
        self.members.load()?;
        self.expenses.load()?;
        debug!(
            households = self.households.count()?,
            members = self.members.count()?,
            expenses = self.expenses.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), HousesplitError> {
        self.households.save()?;
        self.members.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Whether `housesplit init` has been run
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), HousesplitError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), HousesplitError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = Storage::new(HousesplitPaths::with_base_dir(temp_dir.path())).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.households.count().unwrap(), 0);
        assert_eq!(storage.members.count().unwrap(), 0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_log_helpers_write_audit_entries() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(HousesplitPaths::with_base_dir(temp_dir.path())).unwrap();

        storage
            .log_create(EntityType::Member, "mem-1", None, &json!({"name": "Alice"}))
            .unwrap();
        storage
            .log_update(
                EntityType::Household,
                "hh-1",
                Some("Flat".into()),
                &json!({"members": 1}),
                &json!({"members": 2}),
                None,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].entity_type, EntityType::Household);
    }
}
