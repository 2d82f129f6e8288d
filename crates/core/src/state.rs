// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registro_domain::{Field, FormRecord};
use std::time::Duration;

/// Default length of the simulated save.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    /// Accepting edits; the submit control may be used.
    #[default]
    Idle,
    /// Waiting for the save to finish.
    Submitting,
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long the simulated save takes.
    pub save_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            save_delay: DEFAULT_SAVE_DELAY,
        }
    }
}

/// A submission that passed validation and is waiting for its save.
///
/// Holds the record as it was when the submission began. It is consumed by
/// `FormEngine::finish_submit`, which only accepts the ticket it issued.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub(crate) ticket: u64,
    pub(crate) record: FormRecord,
}

impl PendingSubmission {
    /// Returns the record being saved.
    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }
}

/// What the presentation layer needs to render one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// The field.
    pub field: Field,
    /// Current value as text.
    pub value: String,
    /// Current error message, if any.
    pub error: Option<String>,
    /// Whether the field is non-empty and has no error.
    pub valid_and_non_empty: bool,
}

/// Label shown on the submit control while idle.
pub const SUBMIT_LABEL: &str = "Save record";

/// Label shown on the submit control while saving.
pub const SUBMITTING_LABEL: &str = "Saving...";

/// State of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    /// Whether the control can be used.
    pub enabled: bool,
    /// Text on the control.
    pub label: &'static str,
}

/// Whole-form status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormStatus {
    /// Every required field is valid.
    Complete,
    /// At least one required field needs attention.
    Incomplete,
}

impl FormStatus {
    /// Returns the banner text.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Complete => "Form complete",
            Self::Incomplete => "Complete the required fields",
        }
    }
}
