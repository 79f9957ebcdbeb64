//! Reusable UI component modules.

pub mod icons;
pub mod theme_toggle;
