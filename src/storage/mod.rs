//! Storage layer for libris
//!
//! Provides headerless CSV file storage with atomic writes and automatic
//! directory creation. Each collection lives in its own file and is loaded
//! and rewritten whole; there is no incremental persistence. The
//! repositories guard their in-memory state with an internal lock, which
//! protects a single process only. Nothing coordinates concurrent
//! processes, and the last writer wins.

pub mod books;
pub mod file_io;
pub mod init;
pub mod loans;
pub mod members;

pub use books::BookRepository;
pub use file_io::{read_records, write_records_atomic};
pub use init::initialize_storage;
pub use loans::LoanRepository;
pub use members::MemberRepository;

use crate::config::paths::LibrisPaths;
use crate::error::LibrisError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LibrisPaths,
    pub books: BookRepository,
    pub members: MemberRepository,
    pub loans: LoanRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LibrisPaths) -> Result<Self, LibrisError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            books: BookRepository::new(paths.books_file()),
            members: MemberRepository::new(paths.members_file()),
            loans: LoanRepository::new(paths.loans_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LibrisPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&self) -> Result<(), LibrisError> {
        self.books.load()?;
        self.members.load()?;
        self.loans.load()?;
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), LibrisError> {
        self.books.save()?;
        self.members.save()?;
        self.loans.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_with_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.books.count().unwrap(), 0);
        assert_eq!(storage.members.count().unwrap(), 0);
        assert_eq!(storage.loans.count().unwrap(), 0);
    }
}
