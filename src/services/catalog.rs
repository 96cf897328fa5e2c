//! Catalog service
//!
//! Business logic for the book catalog: adding titles and listing the
//! collection.

use crate::config::Settings;
use crate::error::{LibrisError, LibrisResult};
use crate::models::Book;
use crate::storage::Storage;

/// Service for catalog management
pub struct CatalogService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Add a book to the catalog
    ///
    /// All copies start on the shelf. Duplicate ISBNs are accepted unless
    /// `strict_identifiers` is on.
    pub fn add_book(
        &self,
        isbn: &str,
        title: &str,
        author: &str,
        copies_total: u32,
    ) -> LibrisResult<Book> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Err(LibrisError::Validation("ISBN cannot be empty".into()));
        }

        self.storage.books.load()?;

        if self.settings.strict_identifiers && self.storage.books.isbn_exists(isbn)? {
            return Err(LibrisError::Duplicate {
                entity_type: "Book",
                identifier: isbn.to_string(),
            });
        }

        let book = Book::new(isbn, title, author, copies_total);
        self.storage.books.append(book.clone())?;
        self.storage.books.save()?;

        Ok(book)
    }

    /// List the whole catalog in file order
    pub fn list_books(&self) -> LibrisResult<Vec<Book>> {
        self.storage.books.load()?;
        self.storage.books.all()
    }
}
