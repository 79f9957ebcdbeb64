//! Theme palettes and page stylesheet injection.
//!
//! `palette` maps a mode to its colours; `global_styles` turns those
//! colours into CSS and writes them to the document.

pub mod global_styles;
pub mod palette;
