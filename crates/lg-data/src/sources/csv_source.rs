//! Reading and rewriting the feedback CSV file
//!
//! Header: `S.No,Name,Email,Rating,Feedback,Suggested topic,Attachment name`.
//! Missing optional values are written as empty fields.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use lg_core::FeedbackEntry;

use crate::StoreError;

/// Load every row; a missing file is an empty collection
pub fn read_entries(path: &Path) -> Result<Vec<FeedbackEntry>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut entries = Vec::new();
    for result in csv_reader.deserialize() {
        let entry: FeedbackEntry = result?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Overwrite the file with the given rows
pub fn write_entries(path: &Path, entries: &[FeedbackEntry]) -> Result<(), StoreError> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read-merge-overwrite: re-read the file, add one row, rewrite it in full.
///
/// Nothing coordinates writers from different sessions. When two sessions
/// run this concurrently the later rewrite wins and the other row is lost.
pub fn append_entry(path: &Path, entry: &FeedbackEntry) -> Result<usize, StoreError> {
    let mut entries = read_entries(path)?;
    entries.push(entry.clone());
    write_entries(path, &entries)?;
    Ok(entries.len())
}

/// Delete the file; an already missing file counts as success
pub fn remove_file(path: &Path) -> Result<bool, StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}
