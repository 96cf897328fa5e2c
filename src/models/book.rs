//! Book model
//!
//! Represents one catalog entry and its copy counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A book in the catalog
///
/// `copies_available` tracks how many physical copies are currently on the
/// shelf; it is decremented when a loan is issued and incremented when one
/// is returned, and never exceeds `copies_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// ISBN, the natural identifier (unique by convention, not enforced)
    pub isbn: String,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Number of copies the library owns
    pub copies_total: u32,

    /// Number of copies currently on the shelf
    pub copies_available: u32,
}

impl Book {
    /// Create a new book with all copies on the shelf
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies_total: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            copies_total,
            copies_available: copies_total,
        }
    }

    /// Whether at least one copy is on the shelf
    pub fn is_available(&self) -> bool {
        self.copies_available > 0
    }

    /// Whether at least one copy is out on loan
    pub fn has_outstanding_copies(&self) -> bool {
        self.copies_available < self.copies_total
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_starts_fully_stocked() {
        let book = Book::new("0001", "Dune", "Frank Herbert", 3);
        assert_eq!(book.copies_total, 3);
        assert_eq!(book.copies_available, 3);
        assert!(book.is_available());
        assert!(!book.has_outstanding_copies());
    }

    #[test]
    fn test_zero_copy_book_is_unavailable() {
        let book = Book::new("0002", "Rare Folio", "Anonymous", 0);
        assert!(!book.is_available());
        assert!(!book.has_outstanding_copies());
    }

    #[test]
    fn test_display() {
        let book = Book::new("0001", "Dune", "Frank Herbert", 1);
        assert_eq!(book.to_string(), "Dune by Frank Herbert (0001)");
    }
}
