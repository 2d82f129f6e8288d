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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, FieldError, FieldErrorKind};
pub use types::{
    CANTIDAD_MAX_LENGTH, DNI_MAX_LENGTH, Field, FormRecord, Lugar, StoredRecord, Tipo,
};
pub use validation::{
    CANTIDAD_MAX, CANTIDAD_MIN, DNI_MIN_DIGITS, NOMBRES_MIN_CHARS, ValidationErrors,
    validate_cantidad, validate_dni, validate_field, validate_nombres, validate_record,
};
