// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FieldError;
use crate::types::{Field, FormRecord};
use std::collections::BTreeMap;

/// Minimum number of digits in a DNI.
pub const DNI_MIN_DIGITS: usize = 8;

/// Minimum number of characters in a trimmed name.
pub const NOMBRES_MIN_CHARS: usize = 3;

/// Smallest accepted quantity.
pub const CANTIDAD_MIN: u32 = 1;

/// Largest accepted quantity.
pub const CANTIDAD_MAX: u32 = 100;

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Validates a DNI value.
///
/// # Errors
///
/// Returns an error if the value is empty, contains a non-digit, or has
/// fewer than 8 digits.
pub fn validate_dni(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required(Field::Dni));
    }
    if !is_all_digits(value) {
        return Err(FieldError::DigitsOnly(Field::Dni));
    }
    if value.chars().count() < DNI_MIN_DIGITS {
        return Err(FieldError::TooShort {
            field: Field::Dni,
            min: DNI_MIN_DIGITS,
        });
    }
    Ok(())
}

/// Validates a full name.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or shorter than 3
/// characters.
pub fn validate_nombres(value: &str) -> Result<(), FieldError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(Field::Nombres));
    }
    if trimmed.chars().count() < NOMBRES_MIN_CHARS {
        return Err(FieldError::TooShort {
            field: Field::Nombres,
            min: NOMBRES_MIN_CHARS,
        });
    }
    Ok(())
}

/// Validates a quantity.
///
/// # Errors
///
/// Returns an error if the value is empty, is not a whole number, or lies
/// outside 1 to 100.
pub fn validate_cantidad(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required(Field::Cantidad));
    }
    if !is_all_digits(value) {
        return Err(FieldError::NotNumeric(Field::Cantidad));
    }

    // All-digit strings only fail to parse on overflow, which is above the maximum.
    let Ok(amount) = value.parse::<u64>() else {
        return Err(FieldError::Exceeds {
            field: Field::Cantidad,
            max: CANTIDAD_MAX,
        });
    };

    if amount < u64::from(CANTIDAD_MIN) {
        return Err(FieldError::NotGreaterThan {
            field: Field::Cantidad,
            bound: CANTIDAD_MIN - 1,
        });
    }
    if amount > u64::from(CANTIDAD_MAX) {
        return Err(FieldError::Exceeds {
            field: Field::Cantidad,
            max: CANTIDAD_MAX,
        });
    }
    Ok(())
}

/// Validates a value against the rules of the given field.
///
/// Fields without rules always pass.
///
/// # Errors
///
/// Returns the field's error if the value breaks one of its rules.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Dni => validate_dni(value),
        Field::Nombres => validate_nombres(value),
        Field::Cantidad => validate_cantidad(value),
        Field::Tipo | Field::Descripcion | Field::Lugar => Ok(()),
    }
}

/// Validates every rule-bearing field of a record.
#[must_use]
pub fn validate_record(record: &FormRecord) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    for field in Field::VALIDATED {
        errors.apply(field, validate_field(field, record.value(field)));
    }
    errors
}

/// The current validation failures of a form, keyed by field.
///
/// A field with no entry is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Replaces a field's entry with the outcome of its validation.
    ///
    /// An `Ok` outcome removes the entry.
    pub fn apply(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => {
                self.entries.remove(&field);
            }
            Err(error) => {
                self.entries.insert(field, error);
            }
        }
    }

    /// Returns the error recorded for a field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    /// Returns the message recorded for a field.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.entries.get(&field).map(ToString::to_string)
    }

    /// Returns whether a field has an error.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Returns whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.values()
    }
}
