// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::PrimitiveDateTime;
use time::macros::format_description;

/// Maximum number of characters accepted by the `dni` input.
pub const DNI_MAX_LENGTH: usize = 12;

/// Maximum number of characters accepted by the `cantidad` input.
pub const CANTIDAD_MAX_LENGTH: usize = 3;

/// Identifies one input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// National identity document number.
    Dni,
    /// Full name.
    Nombres,
    /// Number of units consumed.
    Cantidad,
    /// Beverage type.
    Tipo,
    /// Free-form description.
    Descripcion,
    /// Place of consumption.
    Lugar,
}

impl Field {
    /// Every form field, in display order.
    pub const ALL: [Self; 6] = [
        Self::Dni,
        Self::Nombres,
        Self::Cantidad,
        Self::Tipo,
        Self::Lugar,
        Self::Descripcion,
    ];

    /// The fields that carry validation rules.
    pub const VALIDATED: [Self; 3] = [Self::Dni, Self::Nombres, Self::Cantidad];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dni => "dni",
            Self::Nombres => "nombres",
            Self::Cantidad => "cantidad",
            Self::Tipo => "tipo",
            Self::Descripcion => "descripcion",
            Self::Lugar => "lugar",
        }
    }

    /// Returns the label shown next to this field and in its error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dni => "DNI",
            Self::Nombres => "Nombres",
            Self::Cantidad => "Cantidad",
            Self::Tipo => "Tipo",
            Self::Descripcion => "Descripcion",
            Self::Lugar => "Lugar",
        }
    }

    /// Returns whether this field has validation rules.
    #[must_use]
    pub const fn is_validated(&self) -> bool {
        matches!(self, Self::Dni | Self::Nombres | Self::Cantidad)
    }

    /// Returns the input length limit for this field, if any.
    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        match self {
            Self::Dni => Some(DNI_MAX_LENGTH),
            Self::Cantidad => Some(CANTIDAD_MAX_LENGTH),
            _ => None,
        }
    }

    /// Truncates raw input to this field's length limit.
    ///
    /// Lengths are counted in characters.
    #[must_use]
    pub fn truncate_input(&self, value: &str) -> String {
        match self.max_length() {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        }
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dni" => Ok(Self::Dni),
            "nombres" => Ok(Self::Nombres),
            "cantidad" => Ok(Self::Cantidad),
            "tipo" => Ok(Self::Tipo),
            "descripcion" => Ok(Self::Descripcion),
            "lugar" => Ok(Self::Lugar),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The beverage being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tipo {
    /// Beer.
    #[default]
    Cerveza,
    /// Water.
    Agua,
}

impl Tipo {
    /// Converts this beverage type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cerveza => "Cerveza",
            Self::Agua => "Agua",
        }
    }
}

impl FromStr for Tipo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cerveza" => Ok(Self::Cerveza),
            "agua" => Ok(Self::Agua),
            _ => Err(DomainError::InvalidChoice {
                field: Field::Tipo,
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Tipo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the beverage was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lugar {
    /// At home.
    #[default]
    Casa,
    /// Away from home.
    Afuera,
}

impl Lugar {
    /// Converts this place to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casa => "Casa",
            Self::Afuera => "Afuera",
        }
    }
}

impl FromStr for Lugar {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casa" => Ok(Self::Casa),
            "afuera" => Ok(Self::Afuera),
            _ => Err(DomainError::InvalidChoice {
                field: Field::Lugar,
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Lugar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record captured by the registration form.
///
/// Text inputs are kept exactly as typed; `cantidad` stays a string so that
/// partially typed or invalid input can be shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// National identity document number.
    pub dni: String,
    /// Full name.
    pub nombres: String,
    /// Number of units, as typed.
    pub cantidad: String,
    /// Beverage type.
    pub tipo: Tipo,
    /// Optional description.
    pub descripcion: String,
    /// Place of consumption.
    pub lugar: Lugar,
}

impl FormRecord {
    /// Creates a record holding the form's initial values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dni: String::new(),
            nombres: String::new(),
            cantidad: String::from("1"),
            tipo: Tipo::default(),
            descripcion: String::new(),
            lugar: Lugar::default(),
        }
    }

    /// Returns the current value of a field as text.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Dni => &self.dni,
            Field::Nombres => &self.nombres,
            Field::Cantidad => &self.cantidad,
            Field::Tipo => self.tipo.as_str(),
            Field::Descripcion => &self.descripcion,
            Field::Lugar => self.lugar.as_str(),
        }
    }

    /// Stores a value into a field.
    ///
    /// Choice fields are parsed; text fields are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidChoice` if `tipo` or `lugar` receives an
    /// unknown option. The record is left unchanged in that case.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), DomainError> {
        match field {
            Field::Dni => self.dni = value.to_string(),
            Field::Nombres => self.nombres = value.to_string(),
            Field::Cantidad => self.cantidad = value.to_string(),
            Field::Descripcion => self.descripcion = value.to_string(),
            Field::Tipo => self.tipo = value.parse()?,
            Field::Lugar => self.lugar = value.parse()?,
        }
        Ok(())
    }

    /// Restores every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A saved record as shown on the records screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Identifier within the records list.
    pub id: u64,
    /// National identity document number.
    pub dni: String,
    /// Full name.
    pub nombres: String,
    /// Number of units (1 to 100).
    pub cantidad: u8,
    /// Beverage type.
    pub tipo: Tipo,
    /// Optional description; empty when not provided.
    pub descripcion: String,
    /// Place of consumption.
    pub lugar: Lugar,
    /// When the record was saved.
    pub fecha: PrimitiveDateTime,
}

impl StoredRecord {
    /// Builds a stored record from an accepted form record.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier to assign
    /// * `record` - The accepted form record
    /// * `fecha` - The save timestamp
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnconvertibleRecord` if `cantidad` does not hold
    /// a number between 1 and 100.
    pub fn from_form(
        id: u64,
        record: &FormRecord,
        fecha: PrimitiveDateTime,
    ) -> Result<Self, DomainError> {
        let cantidad: u8 = record
            .cantidad
            .parse::<u8>()
            .ok()
            .filter(|value| (1..=100).contains(value))
            .ok_or_else(|| DomainError::UnconvertibleRecord {
                reason: format!("cantidad '{}' is not between 1 and 100", record.cantidad),
            })?;

        Ok(Self {
            id,
            dni: record.dni.clone(),
            nombres: record.nombres.trim().to_string(),
            cantidad,
            tipo: record.tipo,
            descripcion: record.descripcion.clone(),
            lugar: record.lugar,
            fecha,
        })
    }

    /// Formats the save timestamp as `YYYY-MM-DD HH:MM`.
    #[must_use]
    pub fn fecha_display(&self) -> String {
        self.fecha
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .unwrap_or_else(|_| self.fecha.to_string())
    }
}
