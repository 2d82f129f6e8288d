// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registro_domain::{Lugar, StoredRecord, Tipo};
use time::macros::datetime;

/// Returns the records shown on a fresh records screen.
#[must_use]
pub fn sample_records() -> Vec<StoredRecord> {
    vec![
        StoredRecord {
            id: 1,
            dni: String::from("12345678"),
            nombres: String::from("Juan Pérez"),
            cantidad: 2,
            tipo: Tipo::Cerveza,
            descripcion: String::from("Para la cena de esta noche"),
            lugar: Lugar::Casa,
            fecha: datetime!(2024-01-15 18:30),
        },
        StoredRecord {
            id: 2,
            dni: String::from("87654321"),
            nombres: String::from("María González"),
            cantidad: 1,
            tipo: Tipo::Agua,
            descripcion: String::from("Agua mineral para el gimnasio"),
            lugar: Lugar::Afuera,
            fecha: datetime!(2024-01-15 17:45),
        },
        StoredRecord {
            id: 3,
            dni: String::from("11223344"),
            nombres: String::from("Carlos Rodríguez"),
            cantidad: 6,
            tipo: Tipo::Cerveza,
            descripcion: String::from("Reunión con amigos del trabajo"),
            lugar: Lugar::Casa,
            fecha: datetime!(2024-01-15 16:20),
        },
    ]
}
