//! Light/dark theme toggle.
//!
//! DESIGN
//! ======
//! The toggle is stateless. Icon placement is a pure function of the
//! `theme` prop, while the capsule's background and border follow the
//! palette of the ambient `ThemeState` context. A click only forwards to
//! the caller's callback; the visual flip happens when the caller supplies
//! the next theme value.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::theme::{ThemeMode, ThemeState};
use crate::util::palette::ThemePalette;

/// Distance (px) an icon is pushed out of the capsule when hidden.
pub const HIDDEN_OFFSET_PX: i32 = 100;

/// Icon transition shared by both glyphs.
pub const ICON_TRANSITION: &str = "all 0.3s linear";

const CAPSULE_STYLE: &str = "position: relative; display: flex; justify-content: space-between; \
     width: 4rem; height: 2rem; margin: 0; border-radius: 30px; font-size: 0.5rem; \
     padding: 0.5rem; overflow: hidden; cursor: pointer;";

/// Vertical offsets for the two glyphs, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconOffsets {
    pub sun: i32,
    pub moon: i32,
}

/// Equality check against `"light"`; anything else renders dark.
pub fn is_light(theme: &str) -> bool {
    ThemeMode::from_name(theme) == ThemeMode::Light
}

pub fn icon_offsets(is_light: bool) -> IconOffsets {
    if is_light {
        IconOffsets { sun: 0, moon: -HIDDEN_OFFSET_PX }
    } else {
        IconOffsets { sun: HIDDEN_OFFSET_PX, moon: 0 }
    }
}

pub fn translate_y(offset: i32) -> String {
    if offset == 0 {
        "translateY(0)".to_owned()
    } else {
        format!("translateY({offset}px)")
    }
}

pub fn icon_style(offset: i32) -> String {
    format!(
        "width: 1.5rem; height: auto; transition: {ICON_TRANSITION}; transform: {};",
        translate_y(offset)
    )
}

/// Inline style for the capsule: fixed layout plus palette-driven chrome.
pub fn capsule_style(palette: &ThemePalette) -> String {
    format!(
        "{CAPSULE_STYLE} background: {}; border: 2px solid {};",
        palette.gradient, palette.toggle_border
    )
}

/// Click listener bound to the capsule: each event runs `toggle_theme`
/// exactly once. Generic over the event so it is callable off-browser.
pub fn click_handler<E: 'static>(toggle_theme: Callback<()>) -> impl Fn(E) + Copy + 'static {
    move |_event| toggle_theme.run(())
}

/// Capsule button showing a sun in light mode and a moon otherwise.
#[component]
pub fn ThemeToggle(#[prop(into)] theme: Signal<String>, toggle_theme: Callback<()>) -> impl IntoView {
    let theme_state = expect_context::<RwSignal<ThemeState>>();

    let offsets = move || icon_offsets(is_light(&theme.get()));
    let sun_style = Signal::derive(move || icon_style(offsets().sun));
    let moon_style = Signal::derive(move || icon_style(offsets().moon));

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            aria-label="Toggle theme"
            style=move || capsule_style(&theme_state.get().palette())
            on:click=click_handler(toggle_theme)
        >
            <SunIcon style=sun_style/>
            <MoonIcon style=moon_style/>
        </button>
    }
}
