//! Member repository for CSV storage
//!
//! Manages loading and saving the membership roll to members.csv.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LibrisError;
use crate::models::Member;

use super::file_io::{read_records, write_records_atomic};

/// Repository for member persistence
pub struct MemberRepository {
    path: PathBuf,
    data: RwLock<Vec<Member>>,
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load members from disk, replacing the in-memory collection
    pub fn load(&self) -> Result<(), LibrisError> {
        let records: Vec<Member> = read_records(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = records;
        Ok(())
    }

    /// Save members to disk, rewriting the whole file
    pub fn save(&self) -> Result<(), LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_records_atomic(&self.path, &data)
    }

    /// Get all members in file order
    pub fn all(&self) -> Result<Vec<Member>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a member to the roll
    pub fn append(&self, member: Member) -> Result<(), LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(member);
        Ok(())
    }

    /// Get the first member with the given identifier
    pub fn find(&self, member_id: &str) -> Result<Option<Member>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|m| m.member_id == member_id).cloned())
    }

    /// Check if a member with the given identifier exists
    pub fn exists(&self, member_id: &str) -> Result<bool, LibrisError> {
        Ok(self.find(member_id)?.is_some())
    }

    /// Count members
    pub fn count(&self) -> Result<usize, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MemberRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("members.csv");
        let repo = MemberRepository::new(path);
        (temp_dir, repo)
    }

    fn test_member(id: &str) -> Member {
        Member::new(
            id,
            "Ada Lovelace",
            "$argon2id$placeholder",
            "ada@example.com",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(test_member("M1")).unwrap();

        assert!(repo.exists("M1").unwrap());
        assert!(!repo.exists("M2").unwrap());
        assert_eq!(repo.find("M1").unwrap().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        repo.load().unwrap();
        repo.append(test_member("M1")).unwrap();
        repo.save().unwrap();

        let repo2 = MemberRepository::new(temp_dir.path().join("members.csv"));
        repo2.load().unwrap();

        let member = repo2.find("M1").unwrap().unwrap();
        assert_eq!(member.email, "ada@example.com");
        assert_eq!(
            member.join_date,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_duplicate_ids_are_kept_in_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(test_member("M1")).unwrap();
        let mut second = test_member("M1");
        second.name = "Grace Hopper".into();
        repo.append(second).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        // First match wins on lookup
        assert_eq!(repo.find("M1").unwrap().unwrap().name, "Ada Lovelace");
    }
}
