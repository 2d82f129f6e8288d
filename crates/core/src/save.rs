// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SaveError;
use crate::state::EngineConfig;
use registro_domain::FormRecord;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Stores an accepted record.
pub trait SaveBackend {
    /// Saves a record.
    ///
    /// # Errors
    ///
    /// Returns a `SaveError` if the record could not be stored.
    fn save(&self, record: &FormRecord) -> impl Future<Output = Result<(), SaveError>> + Send;
}

/// Save backend that waits a fixed delay and always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSave {
    delay: Duration,
}

impl SimulatedSave {
    /// Creates a simulated save with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a simulated save using the configured delay.
    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.save_delay)
    }

    /// Returns the delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSave {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl SaveBackend for SimulatedSave {
    async fn save(&self, record: &FormRecord) -> Result<(), SaveError> {
        debug!(dni = %record.dni, delay_ms = self.delay.as_millis(), "Simulating save");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
