// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Session, SessionConfig};
use registro::{SaveBackend, SaveError, SimulatedSave};
use registro_domain::{Field, FormRecord};
use registro_notice::NoticeLog;

pub fn create_test_session(seed_samples: bool) -> (Session<NoticeLog, SimulatedSave>, NoticeLog) {
    let log: NoticeLog = NoticeLog::new();
    let config: SessionConfig = SessionConfig {
        seed_samples,
        ..SessionConfig::default()
    };
    (Session::new(config, log.clone()), log)
}

pub fn fill_valid_form<B: SaveBackend>(session: &mut Session<NoticeLog, B>) {
    session.set_field(Field::Dni, "87654321").unwrap();
    session.set_field(Field::Nombres, "Luis Paredes").unwrap();
    session.set_field(Field::Cantidad, "5").unwrap();
}

/// Backend that rejects every save.
#[derive(Debug)]
pub struct FailingSave;

impl SaveBackend for FailingSave {
    async fn save(&self, _record: &FormRecord) -> Result<(), SaveError> {
        Err(SaveError::new("disk full"))
    }
}
