//! Loan repository for CSV storage
//!
//! Manages loading and saving loan records to loans.csv. Loans are only
//! ever appended or closed; nothing deletes a record, which is what makes
//! the max-plus-one identifier sequence safe.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::LibrisError;
use crate::models::Loan;

use super::file_io::{read_records, write_records_atomic};

/// Repository for loan persistence
pub struct LoanRepository {
    path: PathBuf,
    data: RwLock<Vec<Loan>>,
}

impl LoanRepository {
    /// Create a new loan repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load loans from disk, replacing the in-memory collection
    pub fn load(&self) -> Result<(), LibrisError> {
        let records: Vec<Loan> = read_records(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = records;
        Ok(())
    }

    /// Save loans to disk, rewriting the whole file
    pub fn save(&self) -> Result<(), LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_records_atomic(&self.path, &data)
    }

    /// Get all loans in file order
    pub fn all(&self) -> Result<Vec<Loan>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a loan to the collection
    pub fn append(&self, loan: Loan) -> Result<(), LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(loan);
        Ok(())
    }

    /// Next identifier in the loan sequence: one past the highest numeric
    /// identifier on record. Stays monotonic across restarts because the
    /// identifiers live in the file, and cannot collide since loans are
    /// never deleted.
    pub fn next_loan_id(&self) -> Result<String, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let max = data
            .iter()
            .filter_map(|l| l.loan_id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok((max + 1).to_string())
    }

    /// Get the first open loan with the given identifier
    pub fn find_open(&self, loan_id: &str) -> Result<Option<Loan>, LibrisError> {
        let data = self.data.read().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .find(|l| l.loan_id == loan_id && l.is_open())
            .cloned())
    }

    /// Close the first open loan with the given identifier, setting its
    /// return date. Returns the updated loan, or `None` if no open loan
    /// matches (unknown identifier or already returned).
    pub fn close(&self, loan_id: &str, date: NaiveDate) -> Result<Option<Loan>, LibrisError> {
        let mut data = self.data.write().map_err(|e| {
            LibrisError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data
            .iter_mut()
            .find(|l| l.loan_id == loan_id && l.is_open())
        {
            Some(loan) => {
                loan.mark_returned(date);
                Ok(Some(loan.clone()))
            }
            None => Ok(None),
        }
    }

    /// Count loans
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

    fn create_test_repo() -> (TempDir, LoanRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("loans.csv");
        let repo = LoanRepository::new(path);
        (temp_dir, repo)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_loan(id: &str) -> Loan {
        Loan::new(id, "M1", "0001", date(2026, 8, 1), date(2026, 8, 15))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.next_loan_id().unwrap(), "1");
    }

    #[test]
    fn test_sequence_advances_past_highest_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(test_loan("1")).unwrap();
        repo.append(test_loan("7")).unwrap();
        repo.append(test_loan("3")).unwrap();

        assert_eq!(repo.next_loan_id().unwrap(), "8");
    }

    #[test]
    fn test_close_open_loan() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(test_loan("1")).unwrap();

        let closed = repo.close("1", date(2026, 8, 10)).unwrap().unwrap();
        assert_eq!(closed.return_date, Some(date(2026, 8, 10)));

        // Already returned: no open loan matches
        assert!(repo.close("1", date(2026, 8, 11)).unwrap().is_none());
        assert!(repo.find_open("1").unwrap().is_none());
    }

    #[test]
    fn test_close_unknown_loan() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.close("42", date(2026, 8, 10)).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_preserves_sequence() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(test_loan("1")).unwrap();
        repo.append(test_loan("2")).unwrap();
        repo.save().unwrap();

        let repo2 = LoanRepository::new(temp_dir.path().join("loans.csv"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);
        assert_eq!(repo2.next_loan_id().unwrap(), "3");
    }
}
