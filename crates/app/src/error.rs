// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session layer.

use crate::navigation::Screen;
use registro::CoreError;
use registro_registry::RegistryError;
use thiserror::Error;

/// Session-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The action belongs to a screen that is not visible.
    #[error("'{action}' is only available on the {required} screen (current: {current})")]
    WrongScreen {
        /// The attempted action.
        action: &'static str,
        /// The screen the action belongs to.
        required: Screen,
        /// The visible screen.
        current: Screen,
    },

    /// The form engine rejected the request.
    #[error(transparent)]
    Form(#[from] CoreError),

    /// The records list rejected the request.
    #[error(transparent)]
    Records(#[from] RegistryError),
}
