//! About section: experience, profile, education and skills.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Motion, RevealConfig, Stagger};

use crate::content::{
    ABOUT_NAME, ABOUT_PARAGRAPHS, ABOUT_SUBTITLE, ABOUT_TITLE, EDUCATION, EXPERIENCE, HIGHLIGHTS,
    SKILL_GROUPS, SkillGroup, TimelineEntry,
};

use super::RevealOnScroll;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "section about",

            RevealOnScroll {
                h2 { class: "gradient-text section-title", "{ABOUT_TITLE}" }

                Timeline { heading: "💼 Professional Experience", entries: EXPERIENCE.to_vec() }

                div {
                    class: "profile card",
                    h3 { class: "profile-name", "{ABOUT_NAME}" }
                    p { class: "profile-subtitle", "\"{ABOUT_SUBTITLE}\"" }
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { class: "profile-text", "{paragraph}" }
                    }
                    ul {
                        class: "highlights",
                        for highlight in HIGHLIGHTS {
                            li { "{highlight}" }
                        }
                    }
                }

                Timeline { heading: "🎓 Education", entries: EDUCATION.to_vec() }

                div {
                    class: "skills card",
                    h2 { class: "gradient-text section-title", "I Work With:" }
                    div {
                        class: "skills-grid",
                        for group in SKILL_GROUPS {
                            SkillSection { group }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Timeline(heading: String, entries: Vec<TimelineEntry>) -> Element {
    rsx! {
        div {
            class: "timeline card",
            h2 { class: "timeline-heading", "{heading}" }
            for entry in entries {
                div {
                    class: "timeline-entry",
                    span { class: "timeline-dot" }
                    h3 { class: "timeline-title", "{entry.title}" }
                    p { class: "timeline-place", "{entry.place}" }
                    p { class: "timeline-period", "{entry.period}" }
                    if !entry.details.is_empty() {
                        ul {
                            class: "timeline-details",
                            for detail in entry.details {
                                li { "{detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A skill group whose tags fade up one after another.
#[component]
fn SkillSection(group: SkillGroup) -> Element {
    let stagger = Stagger {
        delay_children: Duration::from_millis(200),
        each: Duration::from_millis(100),
    };
    let config = RevealConfig::default();

    rsx! {
        div {
            class: "skill-group",
            h3 { class: "skill-title", "{group.title}" }
            div {
                class: "skill-tags",
                for (i, skill) in group.skills.iter().enumerate() {
                    RevealOnScroll {
                        key: "{skill}",
                        class: "skill-tag-wrap",
                        config: config.with_motion(Motion::reveal().delayed(stagger.delay_for(i))),
                        span { class: "skill-tag", "{skill}" }
                    }
                }
            }
        }
    }
}
