//! Storage initialization
//!
//! Explicit first-run setup: creates the data directory and one empty
//! backing file per collection. Kept as its own step (rather than a side
//! effect of opening storage) so first-run behavior is testable and
//! visible.

use crate::config::paths::LibrisPaths;
use crate::error::LibrisError;

use super::file_io::ensure_file;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and empty books/members/loans files. Existing
/// files are left untouched, so running it again is harmless.
pub fn initialize_storage(paths: &LibrisPaths) -> Result<(), LibrisError> {
    paths.ensure_directories()?;

    ensure_file(paths.books_file())?;
    ensure_file(paths.members_file())?;
    ensure_file(paths.loans_file())?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LibrisPaths) -> bool {
    !paths.books_file().exists()
        || !paths.members_file().exists()
        || !paths.loans_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(paths.books_file().exists());
        assert!(paths.members_file().exists());
        assert!(paths.loans_file().exists());
        assert!(!needs_initialization(&paths));
    }

    #[test]
    fn test_initialize_preserves_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibrisPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.books_file(), "0001,Dune,Frank Herbert,1,1\n").unwrap();
        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.books_file()).unwrap();
        assert_eq!(content, "0001,Dune,Frank Herbert,1,1\n");
    }
}
