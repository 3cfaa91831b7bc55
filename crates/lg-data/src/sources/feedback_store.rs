//! Append-only feedback store backed by a CSV file

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use lg_core::{FeedbackEntry, FeedbackForm};
use tracing::{error, info, warn};

use super::csv_source;
use crate::config::Secret;
use crate::{AdminError, StoreError};

/// Columns of the "Show All Feedback" table (the sequence number is hidden)
pub const DISPLAY_COLUMNS: [&str; 6] = [
    "Name",
    "Email",
    "Rating",
    "Feedback",
    "Suggested topic",
    "Attachment name",
];

/// Validates, persists and lists feedback for one session.
///
/// The in-memory list is loaded once when the store is opened. Every
/// submission re-reads the file, appends one row and rewrites the whole
/// file, so the file stays the source of truth for rows written by other
/// sessions. Concurrent sessions are not coordinated; see
/// [`csv_source::append_entry`].
#[derive(Debug)]
pub struct FeedbackStore {
    path: PathBuf,
    entries: Vec<FeedbackEntry>,
    admin_passphrase: Option<Secret>,
}

impl FeedbackStore {
    /// Open the store, loading any rows already on disk
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = csv_source::read_entries(&path)?;
        info!(
            "Loaded {} feedback entries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self {
            path,
            entries,
            admin_passphrase: None,
        })
    }

    /// A store that starts empty without touching the file
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            admin_passphrase: None,
        }
    }

    /// Passphrase required by [`FeedbackStore::clear_all`]
    pub fn with_admin_passphrase(mut self, passphrase: Option<Secret>) -> Self {
        self.admin_passphrase = passphrase;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn admin_enabled(&self) -> bool {
        self.admin_passphrase.is_some()
    }

    /// Validate and persist a submission.
    ///
    /// The entry only joins the in-memory list once the file write succeeded.
    pub fn submit(&mut self, form: FeedbackForm) -> Result<FeedbackEntry, StoreError> {
        if let Err(err) = form.check() {
            warn!("Rejected feedback submission: {}", err);
            return Err(err.into());
        }

        let sequence_number = u32::try_from(self.entries.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or(StoreError::SequenceExhausted)?;
        let entry = form.into_entry(sequence_number);

        match csv_source::append_entry(&self.path, &entry) {
            Ok(rows_on_disk) => {
                info!(
                    "Stored feedback #{} (rating {}), {} rows on disk",
                    entry.sequence_number, entry.rating, rows_on_disk
                );
            }
            Err(err) => {
                error!("Failed to write {}: {}", self.path.display(), err);
                return Err(err);
            }
        }

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// All entries, oldest first
    pub fn list_all(&self) -> std::slice::Iter<'_, FeedbackEntry> {
        self.entries.iter()
    }

    /// Rows for the feedback table, numbered from 1
    pub fn display_rows(&self) -> impl Iterator<Item = FeedbackRow<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| FeedbackRow {
                row_number: idx + 1,
                entry,
            })
    }

    /// Replace the in-memory list with what is currently on disk
    pub fn reload(&mut self) -> Result<usize, StoreError> {
        self.entries = csv_source::read_entries(&self.path)?;
        info!("Reloaded {} feedback entries", self.entries.len());
        Ok(self.entries.len())
    }

    /// Delete every entry and the file.
    ///
    /// Requires the configured passphrase (exact match) and an explicit
    /// confirmation. Returns how many in-memory entries were dropped.
    pub fn clear_all(&mut self, passphrase: &str, confirmed: bool) -> Result<usize, AdminError> {
        let Some(expected) = &self.admin_passphrase else {
            warn!("Clear requested but no admin passphrase is configured");
            return Err(AdminError::NotConfigured);
        };
        if !expected.matches(passphrase) {
            warn!("Clear refused: wrong admin passphrase");
            return Err(AdminError::Unauthorized);
        }
        if !confirmed {
            return Err(AdminError::NotConfirmed);
        }

        let existed = csv_source::remove_file(&self.path)?;
        let removed = self.entries.len();
        self.entries.clear();
        info!(
            "Cleared {} feedback entries (file existed: {})",
            removed, existed
        );
        Ok(removed)
    }
}

/// One row of the feedback table
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRow<'a> {
    pub row_number: usize,
    pub entry: &'a FeedbackEntry,
}

impl<'a> FeedbackRow<'a> {
    /// Cell values in [`DISPLAY_COLUMNS`] order
    pub fn cells(&self) -> [Cow<'a, str>; 6] {
        let entry = self.entry;
        [
            Cow::Borrowed(entry.name.as_str()),
            Cow::Borrowed(entry.email.as_str()),
            Cow::Owned(entry.rating.to_string()),
            Cow::Borrowed(entry.comment.as_str()),
            entry
                .suggested_topic
                .map(|t| Cow::Borrowed(t.label()))
                .unwrap_or(Cow::Borrowed("")),
            Cow::Borrowed(entry.attachment_name.as_deref().unwrap_or("")),
        ]
    }
}
