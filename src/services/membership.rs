//! Membership service
//!
//! Business logic for member registration. The plaintext password is hashed
//! before the record is built and never persisted.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::crypto::{hash_password, verify_password};
use crate::error::{LibrisError, LibrisResult};
use crate::models::Member;
use crate::storage::Storage;

/// Service for member management
pub struct MembershipService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> MembershipService<'a> {
    /// Create a new membership service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Register a new member, joining today
    pub fn register_member(
        &self,
        member_id: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> LibrisResult<Member> {
        self.register_member_on(member_id, name, email, password, Local::now().date_naive())
    }

    /// Register a new member with an explicit join date
    pub fn register_member_on(
        &self,
        member_id: &str,
        name: &str,
        email: &str,
        password: &str,
        join_date: NaiveDate,
    ) -> LibrisResult<Member> {
        let member_id = member_id.trim();
        if member_id.is_empty() {
            return Err(LibrisError::Validation("Member ID cannot be empty".into()));
        }

        self.storage.members.load()?;

        if self.settings.strict_identifiers && self.storage.members.exists(member_id)? {
            return Err(LibrisError::Duplicate {
                entity_type: "Member",
                identifier: member_id.to_string(),
            });
        }

        let password_hash = hash_password(password)?;
        let member = Member::new(member_id, name, password_hash, email, join_date);

        self.storage.members.append(member.clone())?;
        self.storage.members.save()?;

        Ok(member)
    }

    /// Check a member's credentials against the stored hash
    ///
    /// Unknown member ids and wrong passwords both come back `false`.
    pub fn verify_credentials(&self, member_id: &str, password: &str) -> LibrisResult<bool> {
        self.storage.members.load()?;

        match self.storage.members.find(member_id)? {
            Some(member) => verify_password(password, &member.password_hash),
            None => Ok(false),
        }
    }
}
