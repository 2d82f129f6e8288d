// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Field;

/// Broad category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// The field is empty.
    MissingValue,
    /// The field contains characters it may not contain.
    InvalidFormat,
    /// The field is too short, too small, or too large.
    OutOfRange,
}

/// A validation failure on a single form field.
///
/// Field errors are stored and displayed, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is required but empty.
    Required(Field),
    /// The field may only contain digits.
    DigitsOnly(Field),
    /// The field must be a whole number.
    NotNumeric(Field),
    /// The field has fewer characters than allowed.
    TooShort {
        /// The field that failed.
        field: Field,
        /// The minimum number of characters.
        min: usize,
    },
    /// The numeric value is not above the lower bound.
    NotGreaterThan {
        /// The field that failed.
        field: Field,
        /// The exclusive lower bound.
        bound: u32,
    },
    /// The numeric value is above the upper bound.
    Exceeds {
        /// The field that failed.
        field: Field,
        /// The inclusive upper bound.
        max: u32,
    },
}

impl FieldError {
    /// Returns the field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::DigitsOnly(field) | Self::NotNumeric(field) => *field,
            Self::TooShort { field, .. }
            | Self::NotGreaterThan { field, .. }
            | Self::Exceeds { field, .. } => *field,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> FieldErrorKind {
        match self {
            Self::Required(_) => FieldErrorKind::MissingValue,
            Self::DigitsOnly(_) | Self::NotNumeric(_) => FieldErrorKind::InvalidFormat,
            Self::TooShort { .. } | Self::NotGreaterThan { .. } | Self::Exceeds { .. } => {
                FieldErrorKind::OutOfRange
            }
        }
    }

    /// Returns the message without the field label.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Required(_) => String::from("required"),
            Self::DigitsOnly(_) => String::from("digits only"),
            Self::NotNumeric(_) => String::from("must be numeric"),
            Self::TooShort { field, min } => {
                let unit: &str = if matches!(field, Field::Dni) {
                    "digits"
                } else {
                    "characters"
                };
                format!("minimum {min} {unit}")
            }
            Self::NotGreaterThan { bound, .. } => format!("must be greater than {bound}"),
            Self::Exceeds { max, .. } => format!("cannot exceed {max}"),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field().label(), self.reason())
    }
}

impl std::error::Error for FieldError {}

/// Errors raised by domain operations outside per-field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The name does not match any form field.
    UnknownField(String),
    /// A choice field received an option it does not offer.
    InvalidChoice {
        /// The choice field.
        field: Field,
        /// The rejected value.
        value: String,
    },
    /// A form record could not be turned into a stored record.
    UnconvertibleRecord {
        /// Description of the problem.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "Unknown field '{name}'"),
            Self::InvalidChoice { field, value } => {
                let options: &str = match field {
                    Field::Tipo => "Cerveza, Agua",
                    Field::Lugar => "Casa, Afuera",
                    _ => "none",
                };
                write!(
                    f,
                    "Invalid {} '{value}'. Expected one of: {options}",
                    field.as_str()
                )
            }
            Self::UnconvertibleRecord { reason } => {
                write!(f, "Record cannot be stored: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
