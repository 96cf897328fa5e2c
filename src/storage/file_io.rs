//! CSV file I/O utilities with atomic writes
//!
//! Provides safe whole-file operations over the headerless CSV files that
//! back each collection. A missing file reads as an empty collection; a
//! file that exists but cannot be parsed is a fatal `MalformedRecord`.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LibrisError;

/// Read every record from a headerless CSV file
///
/// Returns an empty vector if the file does not exist yet. Any row with the
/// wrong number of fields, or a field that cannot be parsed into the record
/// type, fails the whole load; there is no partial result.
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, LibrisError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| {
            LibrisError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.map_err(|e| LibrisError::MalformedRecord {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Rewrite a headerless CSV file atomically (write to temp, then rename)
///
/// One record per line, fields in struct declaration order, quoting only
/// where a field contains the delimiter. The file is either completely
/// rewritten or left untouched.
pub fn write_records_atomic<T, P>(path: P, records: &[T]) -> Result<(), LibrisError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LibrisError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LibrisError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| LibrisError::Storage(format!("Failed to serialize record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LibrisError::Storage(format!("Failed to flush records: {}", e)))?;

    // Unwrap the writer stack and sync to disk before rename
    let buffer = writer
        .into_inner()
        .map_err(|e| LibrisError::Storage(format!("Failed to flush records: {}", e)))?;
    let file = buffer
        .into_inner()
        .map_err(|e| LibrisError::Storage(format!("Failed to flush records: {}", e)))?;
    file.sync_all()
        .map_err(|e| LibrisError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        LibrisError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Create an empty backing file if it does not exist yet
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<(), LibrisError> {
    let path = path.as_ref();

    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LibrisError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    File::create(path)
        .map_err(|e| LibrisError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    Ok(())
}
