//! Circulation service
//!
//! The loan lifecycle: issuing a book reserves a copy and opens a loan;
//! returning one closes the loan and puts the copy back. Issue and return
//! are the only operations that touch two collections, and both persist
//! nothing when they fail.

use chrono::{Duration, Local, NaiveDate};

use crate::config::Settings;
use crate::error::{LibrisError, LibrisResult};
use crate::models::Loan;
use crate::storage::Storage;

/// Service for the loan lifecycle
pub struct CirculationService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> CirculationService<'a> {
    /// Create a new circulation service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Issue a book to a member, dated today
    pub fn issue_book(&self, isbn: &str, member_id: &str) -> LibrisResult<Loan> {
        self.issue_book_on(isbn, member_id, Local::now().date_naive())
    }

    /// Issue a book to a member with an explicit issue date
    ///
    /// Takes the first book with a matching ISBN and a copy on the shelf.
    /// The member id is not checked against the roll unless
    /// `strict_identifiers` is on; historically loans were issued to ids
    /// typed at the desk.
    pub fn issue_book_on(
        &self,
        isbn: &str,
        member_id: &str,
        today: NaiveDate,
    ) -> LibrisResult<Loan> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Err(LibrisError::Validation("ISBN cannot be empty".into()));
        }
        let member_id = member_id.trim();
        if member_id.is_empty() {
            return Err(LibrisError::Validation("Member ID cannot be empty".into()));
        }

        self.storage.books.load()?;
        self.storage.loans.load()?;

        if self.settings.strict_identifiers {
            self.storage.members.load()?;
            if !self.storage.members.exists(member_id)? {
                return Err(LibrisError::member_not_found(member_id));
            }
        }

        let book = self
            .storage
            .books
            .checkout(isbn)?
            .ok_or_else(|| LibrisError::book_not_found(isbn))?;

        let loan_id = self.storage.loans.next_loan_id()?;
        let due_date = today + Duration::days(self.settings.loan_period_days);
        let loan = Loan::new(loan_id, member_id, book.isbn.as_str(), today, due_date);

        self.storage.loans.append(loan.clone())?;
        self.storage.books.save()?;
        self.storage.loans.save()?;

        Ok(loan)
    }

    /// Return a book, dated today
    pub fn return_book(&self, loan_id: &str) -> LibrisResult<Loan> {
        self.return_book_on(loan_id, Local::now().date_naive())
    }

    /// Return a book with an explicit return date
    ///
    /// The loan must exist and still be open. The copy goes back to the
    /// first book with the loan's ISBN that has a copy out; if there is no
    /// such book the operation fails and neither collection is touched.
    pub fn return_book_on(&self, loan_id: &str, today: NaiveDate) -> LibrisResult<Loan> {
        let loan_id = loan_id.trim();

        self.storage.books.load()?;
        self.storage.loans.load()?;

        let open = self
            .storage
            .loans
            .find_open(loan_id)?
            .ok_or_else(|| LibrisError::loan_not_found(loan_id))?;

        self.storage
            .books
            .checkin(&open.isbn)?
            .ok_or_else(|| LibrisError::book_not_found(&open.isbn))?;

        let closed = self
            .storage
            .loans
            .close(loan_id, today)?
            .ok_or_else(|| LibrisError::loan_not_found(loan_id))?;

        self.storage.books.save()?;
        self.storage.loans.save()?;

        Ok(closed)
    }

    /// Overdue loans as of today
    pub fn overdue(&self) -> LibrisResult<impl Iterator<Item = Loan>> {
        self.overdue_on(Local::now().date_naive())
    }

    /// Overdue loans as of an explicit date
    ///
    /// Read-only: open loans whose due date has passed, in file order. The
    /// returned iterator filters a snapshot lazily; calling the method
    /// again restarts the scan.
    pub fn overdue_on(&self, today: NaiveDate) -> LibrisResult<impl Iterator<Item = Loan>> {
        self.storage.loans.load()?;
        let loans = self.storage.loans.all()?;

        Ok(loans.into_iter().filter(move |l| l.is_overdue_on(today)))
    }
}
