// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registro_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while working with the records list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record has the requested identifier.
    #[error("Record {0} not found")]
    RecordNotFound(u64),

    /// A deletion was confirmed or cancelled with no prompt open.
    #[error("No deletion is awaiting confirmation")]
    NoPendingDeletion,

    /// The record could not be stored.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
}
