//! Expense repository for JSON storage
//!
//! Expenses are kept in one file and indexed by household in memory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::HousesplitError;
use crate::models::{Expense, ExpenseId, HouseholdId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

#[derive(Default)]
struct ExpenseIndex {
    by_id: HashMap<ExpenseId, Expense>,
    by_household: HashMap<HouseholdId, Vec<ExpenseId>>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<ExpenseIndex>,
}

/// Newest first; same-day expenses by entry time
fn newest_first(a: &Expense, b: &Expense) -> std::cmp::Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ExpenseIndex::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ExpenseIndex>, HousesplitError> {
        self.data
            .read()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ExpenseIndex>, HousesplitError> {
        self.data
            .write()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk and rebuild the household index
    pub fn load(&self) -> Result<(), HousesplitError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.by_id.clear();
        data.by_household.clear();
        for expense in file_data.expenses {
            data.by_household
                .entry(expense.household_id)
                .or_default()
                .push(expense.id);
            data.by_id.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk, newest first
    pub fn save(&self) -> Result<(), HousesplitError> {
        let mut expenses: Vec<_> = self.read()?.by_id.values().cloned().collect();
        expenses.sort_by(newest_first);
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, HousesplitError> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    /// Expenses of one household, newest first
    pub fn get_by_household(
        &self,
        household_id: HouseholdId,
    ) -> Result<Vec<Expense>, HousesplitError> {
        let data = self.read()?;
        let mut expenses: Vec<_> = data
            .by_household
            .get(&household_id)
            .map(|ids| ids.iter().filter_map(|id| data.by_id.get(id)).cloned().collect())
            .unwrap_or_default();
        expenses.sort_by(newest_first);
        Ok(expenses)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), HousesplitError> {
        let mut data = self.write()?;

        if let Some(old) = data.by_id.get(&expense.id) {
            let old_household = old.household_id;
            if let Some(ids) = data.by_household.get_mut(&old_household) {
                ids.retain(|id| *id != expense.id);
            }
        }

        data.by_household
            .entry(expense.household_id)
            .or_default()
            .push(expense.id);
        data.by_id.insert(expense.id, expense);

        Ok(())
    }

    pub fn count(&self) -> Result<usize, HousesplitError> {
        Ok(self.read()?.by_id.len())
    }
}
