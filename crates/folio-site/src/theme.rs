//! Palette for the portfolio.
//!
//! Olive-on-black only; the stylesheet keys its variables off the
//! `data-theme` attribute set here.

use dioxus::prelude::*;

/// Stylesheet palette selector and the serif used for headings and copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub css_value: &'static str,
    pub font_family: &'static str,
}

/// Black background, olive and yellow-green accents.
pub const PALETTE: Palette = Palette {
    css_value: "olive",
    font_family: "'Playfair Display', serif",
};

/// Root component that applies [`PALETTE`].
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": PALETTE.css_value,
            style: "font-family: {PALETTE.font_family};",
            {children}
        }
    }
}
