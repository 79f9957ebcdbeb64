//! Per-theme style values.
//!
//! Pure mapping from `ThemeMode` to the handful of colours the page chrome
//! needs. Rendering code turns these into inline styles or CSS variables.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::state::theme::ThemeMode;

/// Colours resolved for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub body: &'static str,
    pub text: &'static str,
    pub gradient: &'static str,
    pub toggle_border: &'static str,
}

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    body: "#e2e2e2",
    text: "#363537",
    gradient: "linear-gradient(#39598a, #79d7ed)",
    toggle_border: "#ffffff",
};

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    body: "#363537",
    text: "#fafafa",
    gradient: "linear-gradient(#091236, #1e215d)",
    toggle_border: "#6b8096",
};

pub fn palette_for(mode: ThemeMode) -> ThemePalette {
    match mode {
        ThemeMode::Light => LIGHT_PALETTE,
        ThemeMode::Dark => DARK_PALETTE,
    }
}
