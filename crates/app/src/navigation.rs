// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Screen stack navigation.

use tracing::debug;

/// The application's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The registration form.
    Home,
    /// The saved records list.
    Registros,
}

impl Screen {
    /// Converts this screen to its route name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Registros => "Registros",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stack of screens, with the visible screen on top.
///
/// The stack always holds at least the root screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// Creates a navigator showing `root`.
    #[must_use]
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Home)
    }

    /// Returns the stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Shows `screen`.
    ///
    /// If the screen is already on the stack, everything above it is popped;
    /// otherwise it is pushed.
    pub fn navigate(&mut self, screen: Screen) {
        if let Some(index) = self.stack.iter().position(|s| *s == screen) {
            self.stack.truncate(index + 1);
        } else {
            self.stack.push(screen);
        }
        debug!(%screen, depth = self.stack.len(), "Navigated");
    }

    /// Pops the visible screen.
    ///
    /// Returns `false` without moving when only the root is left.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        debug!(screen = %self.current(), "Went back");
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::Home)
    }
}
