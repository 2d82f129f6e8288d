// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A single user session: the form, the records list, and the screen stack.

use crate::error::AppError;
use crate::navigation::{Navigator, Screen};
use registro::{EngineConfig, FormEngine, SaveBackend, SimulatedSave};
use registro_domain::{Field, FormRecord, Lugar, StoredRecord, Tipo};
use registro_notice::{Notice, Notifier};
use registro_registry::{DeletionPrompt, RecordRegistry, RecordsView};
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info};

/// Success notice shown after a record is deleted.
pub const DELETED_MESSAGE: &str = "Record deleted successfully";

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Form engine settings.
    pub engine: EngineConfig,
    /// Whether the records list starts with the sample records.
    pub seed_samples: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            seed_samples: true,
        }
    }
}

/// Ties the form engine to the records list and the screen stack.
///
/// Form actions are accepted on the `Home` screen and list actions on the
/// `Registros` screen. The form draft survives navigation.
#[derive(Debug)]
pub struct Session<N, B = SimulatedSave> {
    engine: FormEngine<N>,
    registry: RecordRegistry,
    navigator: Navigator,
    notifier: N,
    backend: B,
}

impl<N: Notifier + Clone> Session<N, SimulatedSave> {
    /// Creates a session that saves through the simulated backend.
    #[must_use]
    pub fn new(config: SessionConfig, notifier: N) -> Self {
        let backend: SimulatedSave = SimulatedSave::from_config(&config.engine);
        Self::with_backend(config, notifier, backend)
    }
}

impl<N: Notifier + Clone, B: SaveBackend> Session<N, B> {
    /// Creates a session that saves through `backend`.
    ///
    /// # Arguments
    ///
    /// * `config` - Session settings
    /// * `notifier` - Receives every notice the session emits
    /// * `backend` - Performs the save step of a submission
    #[must_use]
    pub fn with_backend(config: SessionConfig, notifier: N, backend: B) -> Self {
        let registry: RecordRegistry = if config.seed_samples {
            RecordRegistry::with_samples()
        } else {
            RecordRegistry::new()
        };
        info!(
            records = registry.len(),
            seeded = config.seed_samples,
            "Session started"
        );
        Self {
            engine: FormEngine::new(notifier.clone()),
            registry,
            navigator: Navigator::default(),
            notifier,
            backend,
        }
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Shows `screen`.
    ///
    /// Leaving the records screen dismisses an open delete prompt.
    pub fn navigate(&mut self, screen: Screen) {
        let previous: Screen = self.screen();
        self.navigator.navigate(screen);
        self.dismiss_prompt_on_leave(previous);
    }

    /// Returns to the previous screen.
    ///
    /// Returns `false` when already on the first screen. Leaving the records
    /// screen dismisses an open delete prompt.
    pub fn go_back(&mut self) -> bool {
        let previous: Screen = self.screen();
        let moved: bool = self.navigator.go_back();
        self.dismiss_prompt_on_leave(previous);
        moved
    }

    /// Returns the form engine.
    #[must_use]
    pub const fn engine(&self) -> &FormEngine<N> {
        &self.engine
    }

    /// Returns the records list.
    #[must_use]
    pub const fn registry(&self) -> &RecordRegistry {
        &self.registry
    }

    /// Sets a form field from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The form is not visible
    /// - The value is not accepted for the field
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), AppError> {
        self.require_screen("set", Screen::Home)?;
        self.engine.set_field(field, value)?;
        Ok(())
    }

    /// Selects the beverage type.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is not visible.
    pub fn select_tipo(&mut self, tipo: Tipo) -> Result<(), AppError> {
        self.require_screen("tipo", Screen::Home)?;
        self.engine.select_tipo(tipo);
        Ok(())
    }

    /// Selects the consumption place.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is not visible.
    pub fn select_lugar(&mut self, lugar: Lugar) -> Result<(), AppError> {
        self.require_screen("lugar", Screen::Home)?;
        self.engine.select_lugar(lugar);
        Ok(())
    }

    /// Submits the form and adds the accepted record to the list.
    ///
    /// The record is stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The form is not visible
    /// - The engine rejects or fails the submission
    /// - The accepted record cannot be stored
    pub async fn submit(&mut self) -> Result<StoredRecord, AppError> {
        self.require_screen("submit", Screen::Home)?;
        let accepted: FormRecord = self.engine.submit(&self.backend).await?;
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let fecha: PrimitiveDateTime = PrimitiveDateTime::new(now.date(), now.time());
        let stored: StoredRecord = self.registry.append(&accepted, fecha)?.clone();
        debug!(id = stored.id, "Submitted record stored");
        Ok(stored)
    }

    /// Asks for confirmation before deleting a record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The records list is not visible
    /// - No record has this id
    pub fn request_deletion(&mut self, id: u64) -> Result<DeletionPrompt, AppError> {
        self.require_screen("delete", Screen::Registros)?;
        Ok(self.registry.request_deletion(id)?)
    }

    /// Deletes the record awaiting confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The records list is not visible
    /// - No deletion is awaiting confirmation
    pub fn confirm_deletion(&mut self) -> Result<StoredRecord, AppError> {
        self.require_screen("confirm", Screen::Registros)?;
        let removed: StoredRecord = self.registry.confirm_deletion()?;
        self.notifier.notify(Notice::success(DELETED_MESSAGE));
        Ok(removed)
    }

    /// Dismisses the delete confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The records list is not visible
    /// - No deletion is awaiting confirmation
    pub fn cancel_deletion(&mut self) -> Result<(), AppError> {
        self.require_screen("cancel", Screen::Registros)?;
        self.registry.cancel_deletion()?;
        Ok(())
    }

    /// Returns what the records screen renders.
    #[must_use]
    pub fn records_view(&self) -> RecordsView {
        self.registry.view()
    }

    fn dismiss_prompt_on_leave(&mut self, previous: Screen) {
        if self.screen() != previous && self.registry.cancel_deletion().is_ok() {
            debug!(%previous, "Delete prompt dismissed on leaving screen");
        }
    }

    fn require_screen(&self, action: &'static str, required: Screen) -> Result<(), AppError> {
        let current: Screen = self.screen();
        if current == required {
            Ok(())
        } else {
            Err(AppError::WrongScreen {
                action,
                required,
                current,
            })
        }
    }
}
