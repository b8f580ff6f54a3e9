//! Animated personal portfolio
//!
//! A Dioxus desktop application: typing splash, hero with cycling roles,
//! about, a live project listing and a contact form.

pub mod bridge;
pub mod components;
pub mod content;
pub mod state;
pub mod theme;
