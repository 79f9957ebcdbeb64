//! Client-side application state.

pub mod theme;
