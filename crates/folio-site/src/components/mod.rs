//! UI components for the portfolio.

mod about;
mod app;
mod contact;
mod home;
mod loading_screen;
mod projects;
mod reveal_on_scroll;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use home::*;
pub use loading_screen::*;
pub use projects::*;
pub use reveal_on_scroll::*;

use dioxus::prelude::*;

/// `false` on the first render and `true` from the next one, so mount
/// entrances can transition from their hidden pose.
pub fn use_entered() -> Signal<bool> {
    let mut entered = use_signal(|| false);
    use_effect(move || {
        if !*entered.peek() {
            entered.set(true);
        }
    });
    entered
}
