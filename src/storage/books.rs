//! Book repository for CSV storage
//!
//! Manages loading and saving the catalog to books.csv. The collection is
//! kept as an ordered list, not a map: duplicate ISBNs are legal and file
//! order is observable, so every lookup is a first-match scan.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LibrisError;
use crate::models::Book;

use super::file_io::{read_records, write_records_atomic};

/// Repository for book persistence
pub struct BookRepository {
    path: PathBuf,
    data: RwLock<Vec<Book>>,
}

impl BookRepository {
    /// Create a new book repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load books from disk, replacing the in-memory collection
    pub fn load(&self) -> Result<(), LibrisError> {
        let records: Vec<Book> = read_records(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = records;
        Ok(())
    }

    /// Save books to disk, rewriting the whole file
    pub fn save(&self) -> Result<(), LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_records_atomic(&self.path, &data)
    }

    /// Get all books in file order
    pub fn all(&self) -> Result<Vec<Book>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a book to the collection
    pub fn append(&self, book: Book) -> Result<(), LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(book);
        Ok(())
    }

    /// Get the first book with the given ISBN
    pub fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|b| b.isbn == isbn).cloned())
    }

    /// Check if any book carries the given ISBN
    pub fn isbn_exists(&self, isbn: &str) -> Result<bool, LibrisError> {
        Ok(self.find_by_isbn(isbn)?.is_some())
    }

    /// Take one copy of the first book with the given ISBN that has a copy
    /// on the shelf. Returns the updated book, or `None` if no such book
    /// exists (unknown ISBN or everything already out).
    pub fn checkout(&self, isbn: &str) -> Result<Option<Book>, LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|b| b.isbn == isbn && b.is_available()) {
            Some(book) => {
                book.copies_available -= 1;
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    /// Put one copy back on the shelf for the first book with the given
    /// ISBN that has a copy out. Returns the updated book, or `None` if the
    /// ISBN is unknown or no copy of it is out (incrementing such a book
    /// would push the counter past `copies_total`).
    pub fn checkin(&self, isbn: &str) -> Result<Option<Book>, LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data
            .iter_mut()
            .find(|b| b.isbn == isbn && b.has_outstanding_copies())
        {
            Some(book) => {
                book.copies_available += 1;
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    /// Count books
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
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BookRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.csv");
        let repo = BookRepository::new(path);
        (temp_dir, repo)
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

        repo.append(Book::new("0001", "Dune", "Frank Herbert", 3)).unwrap();

        let found = repo.find_by_isbn("0001").unwrap().unwrap();
        assert_eq!(found.title, "Dune");
        assert!(repo.find_by_isbn("9999").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        repo.load().unwrap();
        repo.append(Book::new("0001", "Dune", "Frank Herbert", 3)).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("books.csv");
        let repo2 = BookRepository::new(path);
        repo2.load().unwrap();

        let found = repo2.find_by_isbn("0001").unwrap().unwrap();
        assert_eq!(found.title, "Dune");
    }

    #[test]
    fn test_checkout_decrements_until_exhausted() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(Book::new("0001", "Dune", "Frank Herbert", 2)).unwrap();

        assert_eq!(repo.checkout("0001").unwrap().unwrap().copies_available, 1);
        assert_eq!(repo.checkout("0001").unwrap().unwrap().copies_available, 0);
        assert!(repo.checkout("0001").unwrap().is_none());
        assert!(repo.checkout("9999").unwrap().is_none());
    }

    #[test]
    fn test_checkin_never_exceeds_total() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(Book::new("0001", "Dune", "Frank Herbert", 1)).unwrap();

        // Fully stocked: nothing to check in
        assert!(repo.checkin("0001").unwrap().is_none());

        repo.checkout("0001").unwrap().unwrap();
        assert_eq!(repo.checkin("0001").unwrap().unwrap().copies_available, 1);
        assert!(repo.checkin("0001").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_isbns_first_match_wins() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(Book::new("0001", "Dune", "Frank Herbert", 1)).unwrap();
        repo.append(Book::new("0001", "Dune (reprint)", "Frank Herbert", 5)).unwrap();

        let taken = repo.checkout("0001").unwrap().unwrap();
        assert_eq!(taken.title, "Dune");

        // First copy exhausted: the scan falls through to the reprint
        let taken = repo.checkout("0001").unwrap().unwrap();
        assert_eq!(taken.title, "Dune (reprint)");
        assert_eq!(taken.copies_available, 4);
    }
}
