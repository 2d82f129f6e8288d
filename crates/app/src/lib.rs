// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session wiring for Registro.
//!
//! A `Session` owns one form engine, the records list, and the screen stack.
//! Form actions are only accepted while the form is visible and list actions
//! only while the records screen is visible.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod navigation;
mod session;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub use navigation::{Navigator, Screen};
pub use session::{DELETED_MESSAGE, Session, SessionConfig};
