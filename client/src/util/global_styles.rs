//! Page-wide styles and theme variables.
//!
//! `install` injects the shared stylesheet into `<head>` once at startup.
//! `apply` writes the active palette as CSS custom properties and a
//! `data-theme` attribute on the `<html>` element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser both calls no-op so non-WASM builds and tests stay
//! deterministic; the CSS text itself is produced by pure functions.

#[cfg(test)]
#[path = "global_styles_test.rs"]
mod global_styles_test;

use crate::state::theme::ThemeMode;
use crate::util::palette::{ThemePalette, palette_for};

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "dijitle-global-styles";

/// Shared stylesheet. Colours come from the variables set by `apply`.
pub fn global_css() -> String {
    let defaults = palette_vars(&palette_for(ThemeMode::default()));
    format!(
        ":root {{ {defaults} }}\n\
         *, *::before, *::after {{ box-sizing: border-box; }}\n\
         body {{ margin: 0; padding: 2rem; font-family: sans-serif; \
         background: var(--body); color: var(--text); \
         transition: background 0.3s linear, color 0.3s linear; }}\n"
    )
}

/// Render a palette as CSS custom property declarations.
pub fn palette_vars(palette: &ThemePalette) -> String {
    format!(
        "--body: {}; --text: {}; --gradient: {}; --toggle-border: {};",
        palette.body, palette.text, palette.gradient, palette.toggle_border
    )
}

/// Document that can hold the injected stylesheet.
pub trait StyleHost {
    fn has_element(&self, id: &str) -> bool;

    /// Append a `<style>` element with `id` and `css` to the head. Returns
    /// `false` when the host could not insert it.
    fn insert_style(&mut self, id: &str, css: &str) -> bool;
}

#[cfg(feature = "csr")]
impl StyleHost for web_sys::Document {
    fn has_element(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    fn insert_style(&mut self, id: &str, css: &str) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        let Ok(style) = self.create_element("style") else {
            return false;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).is_ok()
    }
}

/// Inject the shared stylesheet into `host` unless it is already present.
///
/// Returns `true` when the stylesheet was inserted by this call.
pub fn install_into(host: &mut impl StyleHost) -> bool {
    if host.has_element(STYLE_ELEMENT_ID) {
        return false;
    }
    host.insert_style(STYLE_ELEMENT_ID, &global_css())
}

/// Inject the shared stylesheet into the page document. Calling this more
/// than once has no further effect.
pub fn install() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(mut doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        install_into(&mut doc)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply `mode` to the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let _ = el.set_attribute("data-theme", mode.name());
        if let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.style().set_css_text(&palette_vars(&palette_for(mode)));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}
