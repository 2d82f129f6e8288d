// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, SaveError};
use crate::save::SaveBackend;
use crate::state::{
    FieldView, FormStatus, PendingSubmission, SUBMIT_LABEL, SUBMITTING_LABEL, SubmissionState,
    SubmitControl,
};
use registro_domain::{
    Field, FormRecord, Lugar, Tipo, ValidationErrors, validate_field, validate_record,
};
use registro_notice::{Notice, Notifier, SAVING_DURATION_MS, Severity};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Source of submission tickets, unique across every engine in the process.
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Notice shown when a submission is rejected by validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors before continuing";

/// Notice shown while the save is running.
pub const SAVING_MESSAGE: &str = "Saving record...";

/// Notice shown after a successful save.
pub const SAVED_MESSAGE: &str = "Record saved successfully!";

/// Notice shown after a failed save.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving the record";

/// The registration form: field values, per-field errors, and the submit
/// lifecycle.
///
/// The engine owns the draft record and the list of records it has accepted
/// during this session. Notices are emitted through `N` and never awaited.
#[derive(Debug)]
pub struct FormEngine<N> {
    record: FormRecord,
    errors: ValidationErrors,
    submission: SubmissionState,
    ticket: Option<u64>,
    accepted: Vec<FormRecord>,
    notifier: N,
}

impl<N: Notifier> FormEngine<N> {
    /// Creates an engine with an initial record and no errors.
    #[must_use]
    pub fn new(notifier: N) -> Self {
        Self {
            record: FormRecord::new(),
            errors: ValidationErrors::new(),
            submission: SubmissionState::Idle,
            ticket: None,
            accepted: Vec::new(),
            notifier,
        }
    }

    /// Returns the draft record.
    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Returns the current field errors.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the records accepted so far, oldest first.
    #[must_use]
    pub fn accepted(&self) -> &[FormRecord] {
        &self.accepted
    }

    /// Returns the submit lifecycle state.
    #[must_use]
    pub const fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Returns whether a save is in progress.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting)
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Stores user input into a field and validates it.
    ///
    /// Input longer than the field allows is truncated first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Domain` if a choice field receives an unknown
    /// option. Nothing changes in that case.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), CoreError> {
        let value: String = field.truncate_input(value);
        self.record.set(field, &value)?;
        self.validate_field(field, &value);
        debug!(%field, errors = self.errors.len(), "Field updated");
        Ok(())
    }

    /// Selects the beverage type.
    pub fn select_tipo(&mut self, tipo: Tipo) {
        self.record.tipo = tipo;
    }

    /// Selects the place of consumption.
    pub fn select_lugar(&mut self, lugar: Lugar) {
        self.record.lugar = lugar;
    }

    /// Validates `value` against the rules of `field` and records the outcome.
    ///
    /// Only `dni`, `nombres` and `cantidad` have rules; other fields are left
    /// alone. The value is checked as given, not as stored in the record.
    pub fn validate_field(&mut self, field: Field, value: &str) {
        if !field.is_validated() {
            return;
        }
        self.errors.apply(field, validate_field(field, value));
    }

    /// Returns whether the form may be submitted.
    ///
    /// True only when no error is recorded and every validated field of the
    /// draft passes its rule. Computed on every call.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && validate_record(&self.record).is_empty()
    }

    /// Returns the whole-form status banner.
    #[must_use]
    pub fn status(&self) -> FormStatus {
        if self.is_valid() {
            FormStatus::Complete
        } else {
            FormStatus::Incomplete
        }
    }

    /// Returns the render state of one field.
    #[must_use]
    pub fn field_view(&self, field: Field) -> FieldView {
        let value: String = self.record.value(field).to_string();
        let error: Option<String> = self.errors.message(field);
        FieldView {
            field,
            valid_and_non_empty: !value.is_empty() && error.is_none(),
            value,
            error,
        }
    }

    /// Returns the render state of every field, in display order.
    #[must_use]
    pub fn field_views(&self) -> Vec<FieldView> {
        Field::ALL
            .into_iter()
            .map(|field| self.field_view(field))
            .collect()
    }

    /// Returns the state of the submit control.
    #[must_use]
    pub fn submit_control(&self) -> SubmitControl {
        SubmitControl {
            enabled: self.is_valid() && !self.is_submitting(),
            label: if self.is_submitting() {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
        }
    }

    /// Restores the initial record and clears every error.
    ///
    /// Accepted records are kept.
    pub fn reset(&mut self) {
        self.record.reset();
        self.errors.clear();
    }

    /// Starts a submission.
    ///
    /// Every validated field is checked again against the draft. If the form
    /// is valid the engine moves to `Submitting` and returns the record to
    /// save.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is already in progress
    /// - The form is not valid (an error notice is emitted)
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, CoreError> {
        if self.is_submitting() {
            warn!("Submit requested while a save is in progress");
            return Err(CoreError::SubmissionInProgress);
        }

        for field in Field::VALIDATED {
            let value: String = self.record.value(field).to_string();
            self.validate_field(field, &value);
        }

        if !self.is_valid() {
            info!(errors = self.errors.len(), "Submission rejected by validation");
            self.notifier.notify(Notice::error(VALIDATION_FAILED_MESSAGE));
            return Err(CoreError::ValidationFailed {
                count: self.errors.len(),
                errors: self.errors.clone(),
            });
        }

        let ticket: u64 = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.submission = SubmissionState::Submitting;
        self.ticket = Some(ticket);
        self.notifier.notify(Notice::new(
            SAVING_MESSAGE,
            Severity::Info,
            SAVING_DURATION_MS,
        ));
        debug!(dni = %self.record.dni, "Submission started");

        Ok(PendingSubmission {
            ticket,
            record: self.record.clone(),
        })
    }

    /// Completes a submission with the outcome of its save.
    ///
    /// On success the record is accepted, the form is reset and a success
    /// notice is emitted. On failure the draft and its errors are kept and an
    /// error notice is emitted. The engine returns to `Idle` either way.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No submission is in progress
    /// - `pending` was issued by another engine; this engine keeps waiting
    /// - The save failed
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<(), SaveError>,
    ) -> Result<FormRecord, CoreError> {
        if !self.is_submitting() {
            return Err(CoreError::NoSubmissionPending);
        }
        if self.ticket != Some(pending.ticket) {
            warn!(ticket = pending.ticket, "Save result for another form ignored");
            return Err(CoreError::ForeignSubmission);
        }
        self.submission = SubmissionState::Idle;
        self.ticket = None;

        match outcome {
            Ok(()) => {
                let record: FormRecord = pending.record;
                self.accepted.push(record.clone());
                self.reset();
                info!(accepted = self.accepted.len(), "Record accepted");
                self.notifier.notify(Notice::success(SAVED_MESSAGE));
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "Save failed");
                self.notifier.notify(Notice::error(SAVE_FAILED_MESSAGE));
                Err(CoreError::SaveFailed(err))
            }
        }
    }

    /// Validates the form, saves it through `backend`, and completes the
    /// submission.
    ///
    /// Returns the accepted record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is already in progress
    /// - The form is not valid
    /// - The backend fails to save
    pub async fn submit<B: SaveBackend>(&mut self, backend: &B) -> Result<FormRecord, CoreError> {
        let pending: PendingSubmission = self.begin_submit()?;
        let outcome: Result<(), SaveError> = backend.save(pending.record()).await;
        self.finish_submit(pending, outcome)
    }
}
