//! Root application component.
//!
//! Provides the theming context, keeps the page variables in sync with it
//! and renders the static landing content.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeState;
#[cfg(feature = "csr")]
use crate::util::global_styles;

/// Product name shown in the heading and document title.
pub const PRODUCT_NAME: &str = "Dijitle";
/// Status line under the heading.
pub const STATUS_LINE: &str = "Website running.";
/// Id of the host page element the application mounts into.
pub const MOUNT_POINT_ID: &str = "root";

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    #[cfg(feature = "csr")]
    Effect::new(move || global_styles::apply(theme.get().mode));

    let (theme_name, toggle_theme) = theme_bindings(theme);

    view! {
        <Title text=PRODUCT_NAME/>
        <header class="site-header">
            <ThemeToggle theme=theme_name toggle_theme=toggle_theme/>
        </header>
        <Landing/>
    }
}

/// Theme name and flip callback handed to `ThemeToggle` by the shell.
pub fn theme_bindings(theme: RwSignal<ThemeState>) -> (Signal<String>, Callback<()>) {
    let theme_name = Signal::derive(move || theme.get().mode.name().to_owned());
    let toggle_theme = Callback::new(move |()| {
        theme.update(|t| {
            t.toggle();
        });
    });
    (theme_name, toggle_theme)
}

/// Static page container with the heading and status line.
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>{PRODUCT_NAME}</h1>
            <p>{STATUS_LINE}</p>
        </div>
    }
}
