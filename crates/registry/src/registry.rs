// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RegistryError;
use crate::samples::sample_records;
use registro_domain::{FormRecord, StoredRecord};
use serde::Serialize;
use time::PrimitiveDateTime;
use tracing::{debug, info};

/// Title of the delete confirmation prompt.
pub const DELETE_PROMPT_TITLE: &str = "Delete record";

/// Heading shown when the list has no records.
pub const EMPTY_TITLE: &str = "No records";

/// Hint shown when the list has no records.
pub const EMPTY_HINT: &str = "Records you save will appear here";

/// A delete request waiting for the user to confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPrompt {
    /// The record that would be deleted.
    pub id: u64,
    /// Prompt title.
    pub title: &'static str,
    /// Prompt body naming the record's owner.
    pub message: String,
}

/// What the records screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordsView {
    /// Number of records.
    pub total: usize,
    /// The records, in list order.
    pub records: Vec<StoredRecord>,
}

impl RecordsView {
    /// Returns the empty-state texts when there is nothing to show.
    #[must_use]
    pub fn empty_state(&self) -> Option<(&'static str, &'static str)> {
        if self.records.is_empty() {
            Some((EMPTY_TITLE, EMPTY_HINT))
        } else {
            None
        }
    }
}

/// The saved records shown on the records screen.
///
/// Identifiers are assigned on insertion and never reused, even after the
/// record holding one is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRegistry {
    records: Vec<StoredRecord>,
    pending_deletion: Option<u64>,
    next_id: u64,
}

impl Default for RecordRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            pending_deletion: None,
            next_id: 1,
        }
    }

    /// Creates a registry holding the sample records.
    #[must_use]
    pub fn with_samples() -> Self {
        let records: Vec<StoredRecord> = sample_records();
        let next_id: u64 = records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            records,
            pending_deletion: None,
            next_id,
        }
    }

    /// Returns every record, in list order.
    #[must_use]
    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&StoredRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the identifier of the record awaiting delete confirmation.
    #[must_use]
    pub const fn pending_deletion(&self) -> Option<u64> {
        self.pending_deletion
    }

    /// Returns the identifier the next appended record will get.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Adds an accepted form record.
    ///
    /// # Arguments
    ///
    /// * `record` - The accepted form record
    /// * `fecha` - When it was saved
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Domain` if the record cannot be converted,
    /// which only happens for records that never passed validation.
    pub fn append(
        &mut self,
        record: &FormRecord,
        fecha: PrimitiveDateTime,
    ) -> Result<&StoredRecord, RegistryError> {
        let id: u64 = self.next_id;
        let stored: StoredRecord = StoredRecord::from_form(id, record, fecha)?;
        self.next_id += 1;
        info!(id, total = self.records.len() + 1, "Record added to list");
        self.records.push(stored);
        self.get(id).ok_or(RegistryError::RecordNotFound(id))
    }

    /// Opens a delete confirmation for a record.
    ///
    /// A new request replaces any prompt that is already open.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::RecordNotFound` if no record has this id.
    pub fn request_deletion(&mut self, id: u64) -> Result<DeletionPrompt, RegistryError> {
        let record: &StoredRecord = self.get(id).ok_or(RegistryError::RecordNotFound(id))?;
        let prompt: DeletionPrompt = DeletionPrompt {
            id,
            title: DELETE_PROMPT_TITLE,
            message: format!(
                "Are you sure you want to delete the record of {}?",
                record.nombres
            ),
        };
        self.pending_deletion = Some(id);
        debug!(id, "Deletion requested");
        Ok(prompt)
    }

    /// Deletes the record named by the open prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No prompt is open
    /// - The record no longer exists
    pub fn confirm_deletion(&mut self) -> Result<StoredRecord, RegistryError> {
        let id: u64 = self
            .pending_deletion
            .take()
            .ok_or(RegistryError::NoPendingDeletion)?;
        let index: usize = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RegistryError::RecordNotFound(id))?;
        let removed: StoredRecord = self.records.remove(index);
        info!(id, total = self.records.len(), "Record deleted");
        Ok(removed)
    }

    /// Closes the open prompt without deleting anything.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NoPendingDeletion` if no prompt is open.
    pub fn cancel_deletion(&mut self) -> Result<(), RegistryError> {
        let id: u64 = self
            .pending_deletion
            .take()
            .ok_or(RegistryError::NoPendingDeletion)?;
        debug!(id, "Deletion cancelled");
        Ok(())
    }

    /// Returns what the records screen renders.
    #[must_use]
    pub fn view(&self) -> RecordsView {
        RecordsView {
            total: self.records.len(),
            records: self.records.clone(),
        }
    }
}
