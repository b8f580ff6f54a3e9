//! Scroll-triggered reveal state machine.
//!
//! A reveal has two states, [`Visibility::Hidden`] and
//! [`Visibility::Visible`], and is driven by intersection observations.
//! In [`RevealMode::Once`] the first intersection latches the element
//! visible; in [`RevealMode::Repeat`] leaving the viewport hides it again so
//! the entrance replays on the next intersection.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::motion::Motion;

/// Whether a reveal replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    #[default]
    Once,
    Repeat,
}

/// Current visual state of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Validated reveal settings for one wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    mode: RevealMode,
    threshold: f32,
    motion: Motion,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::Once,
            threshold: 0.2,
            motion: Motion::reveal(),
        }
    }
}

impl RevealConfig {
    /// Builds a config; `threshold` is the visible fraction that counts as
    /// intersecting and must lie in `[0, 1]`.
    pub fn new(mode: RevealMode, threshold: f32, motion: Motion) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::invalid(
                "reveal.threshold",
                format!("{threshold} is outside [0, 1]"),
            ));
        }
        Ok(Self {
            mode,
            threshold,
            motion,
        })
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Inline style for the given state.
    pub fn style(&self, visibility: Visibility) -> String {
        self.motion.style(visibility == Visibility::Visible)
    }
}

/// Hidden/visible state machine fed by intersection events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealMachine {
    mode: RevealMode,
    state: Visibility,
    reveals: u32,
}

impl RevealMachine {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            state: Visibility::Hidden,
            reveals: 0,
        }
    }

    /// Feeds one intersection observation. Returns the new state when it
    /// changed, `None` otherwise.
    pub fn observe(&mut self, intersecting: bool) -> Option<Visibility> {
        let next = match (self.state, intersecting, self.mode) {
            (Visibility::Hidden, true, _) => Visibility::Visible,
            (Visibility::Visible, false, RevealMode::Repeat) => Visibility::Hidden,
            _ => return None,
        };
        if next == Visibility::Visible {
            self.reveals += 1;
        }
        self.state = next;
        Some(next)
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Number of hidden → visible transitions so far.
    pub fn reveal_count(&self) -> u32 {
        self.reveals
    }

    /// True when no further observation can change the state.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::Once && self.is_visible()
    }
}
