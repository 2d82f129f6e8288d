// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registro_domain::{DomainError, ValidationErrors};
use thiserror::Error;

/// Errors reported by a save backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct SaveError {
    /// Description of the failure.
    pub reason: String,
}

impl SaveError {
    /// Creates a new `SaveError`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while editing or submitting the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Submission was attempted while fields are invalid.
    #[error("Form is not valid: {count} field(s) need attention")]
    ValidationFailed {
        /// Number of fields with errors.
        count: usize,
        /// The errors at the time of the attempt.
        errors: ValidationErrors,
    },

    /// A submission is already waiting for its save to finish.
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// A save result arrived while no submission was in progress.
    #[error("No submission is in progress")]
    NoSubmissionPending,

    /// A save result arrived for a submission this form did not start.
    #[error("The submission does not belong to this form")]
    ForeignSubmission,

    /// The save backend reported a failure.
    #[error("Save failed: {0}")]
    SaveFailed(#[from] SaveError),

    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
}
