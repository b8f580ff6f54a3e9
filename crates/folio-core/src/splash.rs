//! Typewriter splash sequence.
//!
//! [`Typewriter`] is the pure state machine: each [`tick`](Typewriter::tick)
//! publishes one more prefix of the target, starting with the empty prefix.
//! [`start_splash`] drives it from a timer and fires the completion callback
//! once, a fixed delay after the last frame.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::schedule::{MIN_PERIOD, ScheduledTask};

/// Text typed out on the loading screen.
pub const DEFAULT_SPLASH_TEXT: &str = "<HI ALL... WELCOME TO MY PORTFOLIO... />";

/// Delay between two frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Pause between the final frame and the completion callback.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// Timing and text for the splash sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashConfig {
    pub text: String,
    pub frame_interval: Duration,
    pub completion_delay: Duration,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_SPLASH_TEXT.to_string(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            completion_delay: DEFAULT_COMPLETION_DELAY,
        }
    }
}

impl SplashConfig {
    /// Rejects a zero frame interval.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.frame_interval < MIN_PERIOD {
            return Err(ConfigError::invalid(
                "timing.splash_interval_ms",
                "frame interval must be at least 1ms",
            ));
        }
        Ok(self)
    }
}

/// Reveals a fixed string one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: String,
    /// Byte offset of every prefix end, `0` through `target.len()`.
    boundaries: Vec<usize>,
    next: usize,
    revealed: usize,
    done: bool,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let boundaries = target
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(target.len()))
            .collect();
        Self {
            target,
            boundaries,
            next: 0,
            revealed: 0,
            done: false,
        }
    }

    /// Advances one frame and returns the newly revealed prefix, or `None`
    /// once the whole target has already been shown.
    pub fn tick(&mut self) -> Option<&str> {
        if self.done {
            return None;
        }
        self.revealed = self.boundaries[self.next];
        self.next += 1;
        if self.next == self.boundaries.len() {
            self.done = true;
        }
        Some(&self.target[..self.revealed])
    }

    /// Prefix shown by the most recent frame.
    pub fn revealed(&self) -> &str {
        &self.target[..self.revealed]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// True once the frame equal to the full target has been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of characters revealed so far.
    pub fn revealed_chars(&self) -> usize {
        self.next.saturating_sub(1)
    }

    /// Frames needed to finish: one per character plus the initial empty one.
    pub fn total_frames(&self) -> usize {
        self.boundaries.len()
    }
}

/// Starts the splash sequence on the current tokio runtime.
///
/// `on_frame` receives every prefix in order; `on_complete` runs once,
/// `completion_delay` after the last frame. Once a cancel or drop of the
/// returned handle has returned, `on_complete` can no longer start, even
/// when the cancel comes from another thread.
pub fn start_splash<F, C>(config: SplashConfig, mut on_frame: F, on_complete: C) -> ScheduledTask
where
    F: FnMut(&str) + Send + 'static,
    C: FnOnce() + Send + 'static,
{
    let period = config.frame_interval.max(MIN_PERIOD);
    ScheduledTask::spawn("splash", move |flag| async move {
        let mut writer = Typewriter::new(config.text);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !writer.is_done() {
            interval.tick().await;
            if flag.is_cancelled() {
                return;
            }
            if let Some(frame) = writer.tick() {
                on_frame(frame);
            }
        }
        debug!(
            chars = writer.revealed_chars(),
            "Splash text fully revealed"
        );

        tokio::time::sleep(config.completion_delay).await;
        if !flag.try_fire() {
            return;
        }
        info!("Splash sequence complete");
        on_complete();
    })
}
