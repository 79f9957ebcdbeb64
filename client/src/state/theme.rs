//! Theme mode owned by the application shell.
//!
//! DESIGN
//! ======
//! The mode lives in a single `RwSignal<ThemeState>` provided by `App`.
//! Components never flip it themselves: they receive the current name and
//! a callback, and the shell applies the change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::palette::{ThemePalette, palette_for};

/// Light or dark display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a theme name. Only the exact string `"light"` is light; every
    /// other value falls through to dark.
    pub fn from_name(name: &str) -> Self {
        if name == "light" { Self::Light } else { Self::Dark }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theming state shared through Leptos context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Style values for the current mode.
    pub fn palette(&self) -> ThemePalette {
        palette_for(self.mode)
    }
}
