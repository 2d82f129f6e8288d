// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records list for Registro.
//!
//! The registry holds the records shown on the records screen. It lives in
//! memory for one session: it starts either empty or with the sample records,
//! receives every record the form accepts, and supports deleting a record
//! after an explicit confirmation.

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

mod error;
mod registry;
mod samples;

#[cfg(test)]
mod tests;

pub use error::RegistryError;
pub use registry::{
    DELETE_PROMPT_TITLE, DeletionPrompt, EMPTY_HINT, EMPTY_TITLE, RecordRegistry, RecordsView,
};
pub use samples::sample_records;
