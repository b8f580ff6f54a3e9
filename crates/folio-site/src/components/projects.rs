//! Latest projects, fetched once and paged locally.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{FeedState, Motion, Project, RevealConfig, Stagger};

use crate::state::Services;

use super::{RevealOnScroll, use_entered};

#[component]
pub fn Projects() -> Element {
    let services = use_context::<Services>();
    let entered = use_entered();
    let step = services.feed.paging().step.max(1);

    let feed = services.feed.clone();
    let listing = use_resource(move || {
        let feed = feed.clone();
        async move { feed.load().await }
    });
    // bumped on "load more" since the cursor itself is not reactive
    let mut shown = use_signal(|| 0usize);

    let body = match &*listing.read() {
        None | Some(FeedState::Loading) => rsx! {
            div { class: "projects-loading pulse", "Loading projects..." }
        },
        Some(FeedState::Failed(message)) => rsx! {
            div { class: "projects-error", "Error: {message}" }
        },
        Some(state) => {
            let _ = shown();
            let projects = state.visible_projects().to_vec();
            let more = state.can_load_more();
            let state = state.clone();
            rsx! {
                div {
                    class: "project-grid",
                    for (i, project) in projects.into_iter().enumerate() {
                        ProjectCard { key: "{project.id}", project, slot: i % step }
                    }
                }
                if more {
                    LoadMoreButton {
                        on_click: move |_| {
                            shown.set(state.load_more());
                        },
                    }
                }
            }
        }
    };

    rsx! {
        section {
            id: "projects",
            class: "section projects",
            h2 {
                class: "section-title",
                style: Motion::title().style(entered()),
                "Latest Projects"
            }
            {body}
        }
    }
}

/// One repository card; `slot` is its position within its page.
#[component]
fn ProjectCard(project: Project, slot: usize) -> Element {
    let delay = Stagger {
        delay_children: Duration::from_millis(200),
        each: Duration::from_millis(150),
    }
    .delay_for(slot);
    let config = RevealConfig::default().with_motion(Motion::card().delayed(delay));

    rsx! {
        RevealOnScroll {
            class: "project-card-wrap",
            config,
            div {
                class: "project-card card",
                h3 { class: "project-name", "{project.name}" }
                p { class: "project-description", "{project.summary()}" }
                a {
                    class: "project-link",
                    href: "{project.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Project Details →"
                }
            }
        }
    }
}

#[component]
fn LoadMoreButton(on_click: EventHandler<()>) -> Element {
    let entered = use_entered();
    rsx! {
        div {
            class: "load-more",
            button {
                class: "primary-button",
                style: Motion::button(Duration::from_millis(600)).style(entered()),
                onclick: move |_| on_click.call(()),
                "Load Additional Projects"
            }
        }
    }
}
