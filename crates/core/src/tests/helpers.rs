// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FormEngine, SaveBackend, SaveError};
use registro_domain::{Field, FormRecord};
use registro_notice::NoticeLog;

pub fn create_test_engine() -> (FormEngine<NoticeLog>, NoticeLog) {
    let log: NoticeLog = NoticeLog::new();
    (FormEngine::new(log.clone()), log)
}

pub fn fill_valid_form(engine: &mut FormEngine<NoticeLog>) {
    engine.set_field(Field::Dni, "12345678").unwrap();
    engine.set_field(Field::Nombres, "Ana Torres").unwrap();
    engine.set_field(Field::Cantidad, "3").unwrap();
}

/// Backend that rejects every save.
pub struct FailingSave;

impl SaveBackend for FailingSave {
    async fn save(&self, _record: &FormRecord) -> Result<(), SaveError> {
        Err(SaveError::new("backend unavailable"))
    }
}
