use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

use super::*;
use crate::util::palette::{DARK_PALETTE, LIGHT_PALETTE};

fn counting_callback() -> (Callback<()>, Arc<AtomicUsize>) {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let callback = Callback::new(move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (callback, clicks)
}

fn render_toggle(theme: &'static str, ambient: ThemeMode, toggle_theme: Callback<()>) -> String {
    provide_context(RwSignal::new(ThemeState::new(ambient)));
    view! {
        <ThemeToggle theme=Signal::derive(move || theme.to_owned()) toggle_theme=toggle_theme/>
    }
    .to_html()
}

// =============================================================
// Icon placement
// =============================================================

#[test]
fn is_light_is_exact_equality() {
    assert!(is_light("light"));
    assert!(!is_light("dark"));
    assert!(!is_light("LIGHT"));
    assert!(!is_light("light "));
    assert!(!is_light(""));
    assert!(!is_light("sepia"));
}

#[test]
fn light_shows_sun_and_hides_moon() {
    let offsets = icon_offsets(true);
    assert_eq!(offsets.sun, 0);
    assert_eq!(offsets.moon, -HIDDEN_OFFSET_PX);
}

#[test]
fn non_light_values_show_moon_and_hide_sun() {
    for theme in ["dark", "Light", "", "high-contrast"] {
        let offsets = icon_offsets(is_light(theme));
        assert_eq!(offsets, IconOffsets { sun: HIDDEN_OFFSET_PX, moon: 0 }, "theme {theme:?}");
    }
}

#[test]
fn translate_y_formats_zero_without_unit() {
    assert_eq!(translate_y(0), "translateY(0)");
    assert_eq!(translate_y(100), "translateY(100px)");
    assert_eq!(translate_y(-100), "translateY(-100px)");
}

#[test]
fn icon_style_animates_linearly() {
    let style = icon_style(HIDDEN_OFFSET_PX);
    assert!(style.contains("transition: all 0.3s linear;"));
    assert!(style.contains("transform: translateY(100px);"));
    assert!(style.contains("width: 1.5rem;"));
}

// =============================================================
// Chrome
// =============================================================

#[test]
fn capsule_style_uses_palette_chrome() {
    let light = capsule_style(&LIGHT_PALETTE);
    assert!(light.contains("background: linear-gradient(#39598a, #79d7ed);"));
    assert!(light.contains("border: 2px solid #ffffff;"));

    let dark = capsule_style(&DARK_PALETTE);
    assert!(dark.contains("background: linear-gradient(#091236, #1e215d);"));
    assert!(dark.contains("border: 2px solid #6b8096;"));
}

#[test]
fn capsule_style_keeps_fixed_layout() {
    let style = capsule_style(&LIGHT_PALETTE);
    assert!(style.contains("width: 4rem;"));
    assert!(style.contains("height: 2rem;"));
    assert!(style.contains("border-radius: 30px;"));
    assert!(style.contains("overflow: hidden;"));
    assert!(style.contains("cursor: pointer;"));
}

// =============================================================
// Click handling
// =============================================================

#[test]
fn click_handler_does_not_run_until_an_event_arrives() {
    Owner::new().with(|| {
        let (toggle_theme, clicks) = counting_callback();
        let _on_click = click_handler::<()>(toggle_theme);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn each_click_invokes_callback_once() {
    Owner::new().with(|| {
        let (toggle_theme, clicks) = counting_callback();

        let on_click = click_handler::<()>(toggle_theme);

        on_click(());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        on_click(());
        on_click(());
        assert_eq!(clicks.load(Ordering::SeqCst), 3);
    });
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn rendering_does_not_invoke_callback() {
    Owner::new().with(|| {
        let (toggle_theme, clicks) = counting_callback();

        let _ = render_toggle("light", ThemeMode::Light, toggle_theme);
        let _ = render_toggle("light", ThemeMode::Light, toggle_theme);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn light_then_dark_scenario() {
    Owner::new().with(|| {
        let (toggle_theme, clicks) = counting_callback();

        let html = render_toggle("light", ThemeMode::Light, toggle_theme);
        assert!(html.contains("transform: translateY(0);"));
        assert!(html.contains("transform: translateY(-100px);"));
        assert!(!html.contains("transform: translateY(100px);"));

        click_handler::<()>(toggle_theme)(());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        let html = render_toggle("dark", ThemeMode::Dark, toggle_theme);
        assert!(html.contains("transform: translateY(100px);"));
        assert!(html.contains("transform: translateY(0);"));
        assert!(!html.contains("transform: translateY(-100px);"));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn chrome_follows_context_not_prop() {
    Owner::new().with(|| {
        let (toggle_theme, _clicks) = counting_callback();

        let html = render_toggle("light", ThemeMode::Dark, toggle_theme);
        assert!(html.contains(DARK_PALETTE.gradient));
        assert!(!html.contains(LIGHT_PALETTE.gradient));
        assert!(html.contains("transform: translateY(-100px);"));
    });
}
