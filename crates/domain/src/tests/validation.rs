// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Field, FieldError, FieldErrorKind, FormRecord, ValidationErrors, validate_cantidad,
    validate_dni, validate_field, validate_nombres, validate_record,
};

#[test]
fn test_validate_dni_rejects_empty() {
    let result: Result<(), FieldError> = validate_dni("");
    assert_eq!(result, Err(FieldError::Required(Field::Dni)));
}

#[test]
fn test_validate_dni_rejects_non_digits() {
    assert_eq!(
        validate_dni("1234567a"),
        Err(FieldError::DigitsOnly(Field::Dni))
    );
    assert_eq!(
        validate_dni("1234 5678"),
        Err(FieldError::DigitsOnly(Field::Dni))
    );
    assert_eq!(
        validate_dni("-12345678"),
        Err(FieldError::DigitsOnly(Field::Dni))
    );
}

#[test]
fn test_validate_dni_rejects_seven_digits() {
    let result: Result<(), FieldError> = validate_dni("1234567");
    let err: FieldError = result.unwrap_err();
    assert_eq!(err.kind(), FieldErrorKind::OutOfRange);
    assert_eq!(err.reason(), "minimum 8 digits");
}

#[test]
fn test_validate_dni_accepts_eight_digits() {
    assert!(validate_dni("12345678").is_ok());
}

#[test]
fn test_validate_dni_accepts_twelve_digits() {
    assert!(validate_dni("123456789012").is_ok());
}

#[test]
fn test_validate_dni_checks_format_before_length() {
    // A short value with a letter reports the format problem.
    assert_eq!(validate_dni("12a"), Err(FieldError::DigitsOnly(Field::Dni)));
}

#[test]
fn test_validate_nombres_rejects_blank() {
    assert_eq!(
        validate_nombres(""),
        Err(FieldError::Required(Field::Nombres))
    );
    assert_eq!(
        validate_nombres("    "),
        Err(FieldError::Required(Field::Nombres))
    );
}

#[test]
fn test_validate_nombres_rejects_two_characters() {
    let err: FieldError = validate_nombres("Al").unwrap_err();
    assert_eq!(err.reason(), "minimum 3 characters");
}

#[test]
fn test_validate_nombres_ignores_surrounding_whitespace() {
    assert!(validate_nombres("  Al  ").is_err());
    assert!(validate_nombres("  Ana  ").is_ok());
}

#[test]
fn test_validate_nombres_counts_characters_not_bytes() {
    // Two characters, four bytes.
    assert!(validate_nombres("Ñá").is_err());
    assert!(validate_nombres("Íñé").is_ok());
}

#[test]
fn test_validate_nombres_accepts_three_characters() {
    assert!(validate_nombres("Ana").is_ok());
}

#[test]
fn test_validate_cantidad_rejects_empty() {
    assert_eq!(
        validate_cantidad(""),
        Err(FieldError::Required(Field::Cantidad))
    );
}

#[test]
fn test_validate_cantidad_rejects_non_numeric() {
    assert_eq!(
        validate_cantidad("1.5"),
        Err(FieldError::NotNumeric(Field::Cantidad))
    );
    assert_eq!(
        validate_cantidad("-1"),
        Err(FieldError::NotNumeric(Field::Cantidad))
    );
    assert_eq!(
        validate_cantidad("dos"),
        Err(FieldError::NotNumeric(Field::Cantidad))
    );
}

#[test]
fn test_validate_cantidad_rejects_zero() {
    let err: FieldError = validate_cantidad("0").unwrap_err();
    assert_eq!(err.reason(), "must be greater than 0");
    assert!(validate_cantidad("000").is_err());
}

#[test]
fn test_validate_cantidad_bounds() {
    assert!(validate_cantidad("1").is_ok());
    assert!(validate_cantidad("100").is_ok());
    assert!(validate_cantidad("007").is_ok());

    let err: FieldError = validate_cantidad("101").unwrap_err();
    assert_eq!(err.reason(), "cannot exceed 100");
}

#[test]
fn test_validate_cantidad_overflowing_number_exceeds_maximum() {
    let result: Result<(), FieldError> = validate_cantidad("99999999999999999999999");
    assert_eq!(
        result,
        Err(FieldError::Exceeds {
            field: Field::Cantidad,
            max: 100
        })
    );
}

#[test]
fn test_validate_field_ignores_unvalidated_fields() {
    assert!(validate_field(Field::Tipo, "").is_ok());
    assert!(validate_field(Field::Lugar, "anything").is_ok());
    assert!(validate_field(Field::Descripcion, "").is_ok());
}

#[test]
fn test_validate_field_dispatches_to_rules() {
    assert!(validate_field(Field::Dni, "1234567").is_err());
    assert!(validate_field(Field::Nombres, "Al").is_err());
    assert!(validate_field(Field::Cantidad, "101").is_err());
}

#[test]
fn test_validate_record_on_initial_form() {
    let record: FormRecord = FormRecord::new();
    let errors: ValidationErrors = validate_record(&record);

    // cantidad defaults to "1", which is valid.
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(Field::Dni));
    assert!(errors.contains(Field::Nombres));
    assert!(!errors.contains(Field::Cantidad));
}

#[test]
fn test_validate_record_on_complete_form() {
    let mut record: FormRecord = FormRecord::new();
    record.dni = String::from("12345678");
    record.nombres = String::from("Ana Torres");
    record.cantidad = String::from("3");

    assert!(validate_record(&record).is_empty());
}

#[test]
fn test_validation_errors_apply_sets_and_clears() {
    let mut errors: ValidationErrors = ValidationErrors::new();

    errors.apply(Field::Dni, Err(FieldError::Required(Field::Dni)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message(Field::Dni).as_deref(), Some("DNI: required"));

    errors.apply(Field::Dni, Ok(()));
    assert!(errors.is_empty());
    assert!(errors.get(Field::Dni).is_none());
}

#[test]
fn test_validation_errors_iterate_in_field_order() {
    let mut errors: ValidationErrors = ValidationErrors::new();
    errors.apply(Field::Cantidad, Err(FieldError::Required(Field::Cantidad)));
    errors.apply(Field::Dni, Err(FieldError::Required(Field::Dni)));

    let fields: Vec<Field> = errors.iter().map(FieldError::field).collect();
    assert_eq!(fields, vec![Field::Dni, Field::Cantidad]);

    errors.clear();
    assert!(errors.is_empty());
}
