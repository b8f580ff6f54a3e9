//! Root application component.

use dioxus::prelude::*;

use crate::state::{self, AppPhase, Services};
use crate::theme::ThemedRoot;

use super::{About, Contact, Home, LoadingScreen, Projects};

/// Root application component.
#[component]
pub fn App() -> Element {
    let body = match state::services() {
        Some(services) => rsx! { Site { services: services.clone() } },
        None => rsx! {
            div { class: "startup-error", "Portfolio services were not initialised." }
        },
    };

    rsx! {
        ThemedRoot { {body} }
    }
}

/// Splash first, then the sections.
#[component]
fn Site(services: Services) -> Element {
    let services = use_context_provider(|| services);
    let mut phase = use_signal(|| AppPhase::Splash);

    match phase() {
        AppPhase::Splash => rsx! {
            LoadingScreen {
                config: services.config.splash(),
                on_complete: move |_| {
                    tracing::info!("Showing portfolio sections");
                    phase.set(AppPhase::Ready);
                },
            }
        },
        AppPhase::Ready => rsx! {
            main {
                class: "portfolio",
                Home {}
                About {}
                Projects {}
                Contact {}
            }
        },
    }
}
