// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod error;
mod save;
mod state;

#[cfg(test)]
mod tests;

pub use engine::{
    FormEngine, SAVE_FAILED_MESSAGE, SAVED_MESSAGE, SAVING_MESSAGE, VALIDATION_FAILED_MESSAGE,
};
pub use error::{CoreError, SaveError};
pub use save::{SaveBackend, SimulatedSave};
pub use state::{
    DEFAULT_SAVE_DELAY, EngineConfig, FieldView, FormStatus, PendingSubmission, SUBMIT_LABEL,
    SUBMITTING_LABEL, SubmissionState, SubmitControl,
};
