//! Scroll-triggered reveal wrapper.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use folio_core::{RevealConfig, RevealMachine, Visibility};

use crate::bridge;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Wraps `children` and animates them in when they scroll into view.
#[component]
pub fn RevealOnScroll(
    #[props(default)] config: RevealConfig,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let id = use_hook(|| format!("reveal-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let machine = use_hook(|| Rc::new(RefCell::new(RevealMachine::new(config.mode()))));
    let mut visibility = use_signal(Visibility::default);

    let element_id = id.clone();
    use_effect(move || {
        let script = bridge::observer_script(
            &element_id,
            config.threshold(),
            config.mode() == folio_core::RevealMode::Once,
        );
        let machine = machine.clone();
        spawn(async move {
            let mut eval = document::eval(&script);
            while let Ok(intersecting) = eval.recv::<bool>().await {
                let (changed, settled) = {
                    let mut machine = machine.borrow_mut();
                    (machine.observe(intersecting), machine.is_settled())
                };
                if let Some(next) = changed {
                    visibility.set(next);
                }
                if settled {
                    break;
                }
            }
        });
    });

    let style = config.style(visibility());

    rsx! {
        div {
            id: "{id}",
            class: "reveal {class}",
            style: "{style}",
            {children}
        }
    }
}
