//! Typing splash shown before the sections.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::SplashConfig;

use crate::bridge::{self, SplashEvent};

/// Types out `config.text`, then calls `on_complete` once.
#[component]
pub fn LoadingScreen(config: SplashConfig, on_complete: EventHandler<()>) -> Element {
    let mut text = use_signal(String::new);

    // Dropping the handle on unmount cancels any pending frame or completion.
    let task = use_hook(move || {
        let (task, mut events) = bridge::splash_channel(config);
        spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    SplashEvent::Frame(frame) => text.set(frame),
                    SplashEvent::Complete => on_complete.call(()),
                }
            }
        });
        Rc::new(task)
    });
    use_drop(move || task.cancel());

    rsx! {
        div {
            class: "loading-screen",
            div {
                class: "loading-text",
                "{text}"
                span { class: "loading-caret", " | " }
            }
            div {
                class: "loading-track",
                div { class: "loading-bar" }
            }
        }
    }
}
