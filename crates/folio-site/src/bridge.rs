//! Bridges core timers and the webview into the UI thread.
//!
//! Core callbacks run on tokio tasks and must be `Send`, while Dioxus signals
//! are not. Each timer therefore reports through an unbounded channel that a
//! component drains with `spawn`, and the returned [`ScheduledTask`] is kept
//! in a hook so unmounting the component cancels the timer.

use std::time::Duration;

use folio_core::{RoleCycle, ScheduledTask, SplashConfig, start_cycler, start_splash};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// Progress of the splash sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEvent {
    Frame(String),
    Complete,
}

/// Starts the splash sequence and returns its handle plus the event stream.
pub fn splash_channel(config: SplashConfig) -> (ScheduledTask, UnboundedReceiver<SplashEvent>) {
    let (tx, rx) = unbounded_channel();
    let done = tx.clone();
    let task = start_splash(
        config,
        move |frame| {
            let _ = tx.send(SplashEvent::Frame(frame.to_string()));
        },
        move || {
            let _ = done.send(SplashEvent::Complete);
        },
    );
    (task, rx)
}

/// Starts the role cycler; the receiver yields each new role index.
pub fn role_channel(
    cycle: RoleCycle,
    interval: Duration,
) -> (ScheduledTask, UnboundedReceiver<usize>) {
    let (tx, rx) = unbounded_channel();
    let task = start_cycler(cycle, interval, move |index| {
        let _ = tx.send(index);
    });
    (task, rx)
}

/// Script that reports intersection changes of `element_id` through
/// `dioxus.send(bool)`. With `once`, the observer disconnects after the
/// first intersection.
pub fn observer_script(element_id: &str, threshold: f32, once: bool) -> String {
    format!(
        r#"
        const el = document.getElementById("{element_id}");
        if (el) {{
            const observer = new IntersectionObserver((entries) => {{
                entries.forEach(entry => {{
                    dioxus.send(entry.isIntersecting);
                    if ({once} && entry.isIntersecting) {{
                        observer.disconnect();
                    }}
                }});
            }}, {{ threshold: {threshold} }});
            observer.observe(el);
        }}
        await new Promise(() => {{}});
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_splash_channel_delivers_frames_then_complete() {
        let config = SplashConfig {
            text: "Hi".to_string(),
            frame_interval: Duration::from_millis(100),
            completion_delay: Duration::from_millis(1000),
        };
        let (_task, mut rx) = splash_channel(config);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            let done = event == SplashEvent::Complete;
            events.push(event);
            if done {
                break;
            }
        }

        assert_eq!(
            events,
            vec![
                SplashEvent::Frame(String::new()),
                SplashEvent::Frame("H".to_string()),
                SplashEvent::Frame("Hi".to_string()),
                SplashEvent::Complete,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_role_channel_closes() {
        let (task, mut rx) = role_channel(RoleCycle::default_roles(), Duration::from_millis(2000));

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));

        task.cancel();
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_observer_script_targets_element() {
        let script = observer_script("reveal-7", 0.2, true);
        assert!(script.contains(r#"getElementById("reveal-7")"#));
        assert!(script.contains("threshold: 0.2"));
        assert!(script.contains("if (true && entry.isIntersecting)"));
    }
}
