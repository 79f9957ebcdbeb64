//! Inline SVG glyphs used by the theme toggle.

use leptos::prelude::*;

/// Sun glyph: a filled disc with eight rays.
#[component]
pub fn SunIcon(#[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <svg
            class="icon icon--sun"
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="yellow"
            stroke="yellow"
            stroke-width="2"
            stroke-linecap="round"
            aria-hidden="true"
            style=move || style.get()
        >
            <circle cx="12" cy="12" r="4.5"/>
            <path d="M12 1.5v2.5M12 20v2.5M1.5 12h2.5M20 12h2.5M4.6 4.6l1.8 1.8M17.6 17.6l1.8 1.8M4.6 19.4l1.8-1.8M17.6 6.4l1.8-1.8"/>
        </svg>
    }
}

/// Moon glyph: a filled crescent.
#[component]
pub fn MoonIcon(#[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <svg
            class="icon icon--moon"
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="gray"
            aria-hidden="true"
            style=move || style.get()
        >
            <path d="M20.5 14.8A8.5 8.5 0 0 1 9.2 3.5a8.5 8.5 0 1 0 11.3 11.3z"/>
        </svg>
    }
}
