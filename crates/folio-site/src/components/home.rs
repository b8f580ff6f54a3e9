//! Hero section: greeting, cycling role, social links and résumé download.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Motion, ResumeAsset, Stagger};
use tracing::warn;

use crate::bridge;
use crate::content::{GREETING, HEADLINE, SOCIAL_LINKS, TAGLINES};
use crate::state::Services;

use super::use_entered;

#[component]
pub fn Home() -> Element {
    let services = use_context::<Services>();
    let entered = use_entered();
    let mut role_index = use_signal(|| 0usize);

    let roles = services.roles.clone();
    let interval = services.config.role_interval();
    let task = use_hook(move || {
        let (task, mut indices) = bridge::role_channel(roles, interval);
        spawn(async move {
            while let Some(index) = indices.recv().await {
                role_index.set(index);
            }
        });
        Rc::new(task)
    });
    use_drop(move || task.cancel());

    let roles = services.roles.roles();
    let role = roles
        .get(role_index() % roles.len().max(1))
        .cloned()
        .unwrap_or_default();

    let stagger = Stagger::default();
    let text = Motion::title();

    rsx! {
        section {
            id: "home",
            class: "section home",

            div {
                class: "home-intro",
                h1 {
                    class: "gradient-text greeting",
                    style: text.style(entered()),
                    "{GREETING}"
                }
                h1 {
                    class: "gradient-text headline",
                    style: text.delayed(stagger.delay_for(1)).style(entered()),
                    "{HEADLINE}"
                }

                div {
                    class: "role-slot",
                    // keyed so each role replays the entrance animation
                    h2 { key: "{role}", class: "role", "{role}" }
                }

                for (i, line) in TAGLINES.iter().enumerate() {
                    p {
                        class: "tagline",
                        style: text.delayed(stagger.delay_for(i + 2)).style(entered()),
                        "{line}"
                    }
                }

                div {
                    class: "social-links",
                    for link in SOCIAL_LINKS {
                        a {
                            class: "social-link",
                            href: link.href,
                            title: link.label,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.glyph}"
                        }
                    }
                }

                if let Some(asset) = services.resume.clone() {
                    ResumeButton { asset }
                }
            }
        }
    }
}

/// Copies the résumé into the download directory.
#[component]
fn ResumeButton(asset: ResumeAsset) -> Element {
    let entered = use_entered();
    let mut status = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    rsx! {
        div {
            class: "resume",
            button {
                class: "primary-button",
                style: Motion::button(Duration::from_millis(600)).style(entered()),
                disabled: saving(),
                onclick: move |_| {
                    let asset = asset.clone();
                    saving.set(true);
                    spawn(async move {
                        let dir = ResumeAsset::default_download_dir();
                        match asset.save_to(&dir).await {
                            Ok(path) => status.set(Some(format!("Saved to {}", path.display()))),
                            Err(e) => {
                                warn!(error = %e, "Résumé download failed");
                                status.set(Some(format!("Download failed: {e}")));
                            }
                        }
                        saving.set(false);
                    });
                },
                "Download Resume"
            }
            if let Some(message) = status() {
                p { class: "resume-status", "{message}" }
            }
        }
    }
}
