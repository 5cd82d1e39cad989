//! Member repository for JSON storage
//!
//! Manages loading and saving members to members.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::HousesplitError;
use crate::models::{Member, MemberId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MemberData {
    members: Vec<Member>,
}

#[derive(Default)]
struct MemberIndex {
    by_id: HashMap<MemberId, Member>,
    /// normalized email -> member id
    by_email: HashMap<String, MemberId>,
}

/// Repository for member persistence
pub struct MemberRepository {
    path: PathBuf,
    data: RwLock<MemberIndex>,
}

impl MemberRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(MemberIndex::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemberIndex>, HousesplitError> {
        self.data
            .read()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemberIndex>, HousesplitError> {
        self.data
            .write()
            .map_err(|e| HousesplitError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load members from disk and rebuild the email index
    pub fn load(&self) -> Result<(), HousesplitError> {
        let file_data: MemberData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.by_id.clear();
        data.by_email.clear();
        for member in file_data.members {
            data.by_email
                .insert(Member::normalize_email(&member.email), member.id);
            data.by_id.insert(member.id, member);
        }

        Ok(())
    }

    /// Save members to disk
    pub fn save(&self) -> Result<(), HousesplitError> {
        let members = self.get_all()?;
        write_json_atomic(&self.path, &MemberData { members })
    }

    pub fn get(&self, id: MemberId) -> Result<Option<Member>, HousesplitError> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    /// All members, ordered by name (case-insensitive)
    pub fn get_all(&self) -> Result<Vec<Member>, HousesplitError> {
        let mut members: Vec<_> = self.read()?.by_id.values().cloned().collect();
        members.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(members)
    }

    /// Look up a member by email (case-insensitive)
    pub fn get_by_email(&self, email: &str) -> Result<Option<Member>, HousesplitError> {
        let data = self.read()?;
        Ok(data
            .by_email
            .get(&Member::normalize_email(email))
            .and_then(|id| data.by_id.get(id))
            .cloned())
    }

    /// Members whose name matches exactly (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Member>, HousesplitError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| m.name.to_lowercase() == needle)
            .collect())
    }

    /// Insert or update a member
    pub fn upsert(&self, member: Member) -> Result<(), HousesplitError> {
        let mut data = self.write()?;

        if let Some(old) = data.by_id.get(&member.id) {
            let old_email = Member::normalize_email(&old.email);
            data.by_email.remove(&old_email);
        }
        data.by_email
            .insert(Member::normalize_email(&member.email), member.id);
        data.by_id.insert(member.id, member);

        Ok(())
    }

    pub fn count(&self) -> Result<usize, HousesplitError> {
        Ok(self.read()?.by_id.len())
    }
}
