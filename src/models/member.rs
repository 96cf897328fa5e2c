//! Member model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered library member
///
/// Members are created once and never mutated afterwards; there is no
/// profile editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member identifier (unique by convention, not enforced)
    pub member_id: String,

    /// Full name
    pub name: String,

    /// Argon2id hash of the member's password in PHC string format.
    /// The plaintext is never stored.
    pub password_hash: String,

    /// Contact email
    pub email: String,

    /// Date the member joined, set at registration and immutable
    pub join_date: NaiveDate,
}

impl Member {
    /// Create a new member
    pub fn new(
        member_id: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            email: email.into(),
            join_date,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let join = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let member = Member::new("M1", "Ada Lovelace", "$argon2id$...", "ada@example.com", join);
        assert_eq!(member.member_id, "M1");
        assert_eq!(member.join_date, join);
    }

    #[test]
    fn test_display() {
        let join = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let member = Member::new("M1", "Ada Lovelace", "hash", "ada@example.com", join);
        assert_eq!(member.to_string(), "Ada Lovelace (M1)");
    }
}
