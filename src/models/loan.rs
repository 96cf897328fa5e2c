//! Loan model
//!
//! A loan links one book copy to one member for a bounded period. Its only
//! state transition is one-way: open (no return date) to returned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A loan record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Loan identifier, a monotonically increasing sequence number
    pub loan_id: String,

    /// The borrowing member's identifier
    pub member_id: String,

    /// ISBN of the borrowed book
    pub isbn: String,

    /// Date the loan was issued
    pub issue_date: NaiveDate,

    /// Date the loan falls due
    pub due_date: NaiveDate,

    /// Date the book came back; `None` while the loan is open.
    /// Serializes to an empty CSV field.
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    /// Create a new open loan
    pub fn new(
        loan_id: impl Into<String>,
        member_id: impl Into<String>,
        isbn: impl Into<String>,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            loan_id: loan_id.into(),
            member_id: member_id.into(),
            isbn: isbn.into(),
            issue_date,
            due_date,
            return_date: None,
        }
    }

    /// Whether the book is still out
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// Whether the loan is open and past due as of `today`
    ///
    /// A loan due exactly today is not yet overdue.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date < today
    }

    /// Close the loan. The transition is one-way; a second call has no
    /// effect on an already-returned loan's date.
    pub fn mark_returned(&mut self, date: NaiveDate) {
        if self.return_date.is_none() {
            self.return_date = Some(date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_loan_is_open() {
        let loan = Loan::new("1", "M1", "0001", date(2026, 8, 1), date(2026, 8, 15));
        assert!(loan.is_open());
        assert_eq!(loan.return_date, None);
    }

    #[test]
    fn test_mark_returned_is_one_way() {
        let mut loan = Loan::new("1", "M1", "0001", date(2026, 8, 1), date(2026, 8, 15));
        loan.mark_returned(date(2026, 8, 10));
        assert!(!loan.is_open());

        loan.mark_returned(date(2026, 8, 20));
        assert_eq!(loan.return_date, Some(date(2026, 8, 10)));
    }

    #[test]
    fn test_overdue_requires_open_and_past_due() {
        let mut loan = Loan::new("1", "M1", "0001", date(2026, 8, 1), date(2026, 8, 15));

        // Not overdue on or before the due date
        assert!(!loan.is_overdue_on(date(2026, 8, 15)));
        assert!(loan.is_overdue_on(date(2026, 8, 16)));

        // A returned loan is never overdue
        loan.mark_returned(date(2026, 8, 20));
        assert!(!loan.is_overdue_on(date(2026, 8, 21)));
    }
}
