//! Typed animation presets.
//!
//! A [`Motion`] names the two poses an element moves between and the
//! [`Transition`] used to get there. Values are validated once at
//! construction; the view layer only ever asks for a CSS declaration block.

use std::fmt::Write as _;
use std::time::Duration;

use crate::error::ConfigError;

/// Longest tween accepted by [`Motion::new`].
pub const MAX_DURATION: Duration = Duration::from_secs(5);

/// Visual pose of an element: opacity, offset in pixels and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Invisible, untransformed.
    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    fn transform(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 {
            return "none".to_string();
        }
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::invalid("motion.opacity", "must be within [0, 1]"));
        }
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(ConfigError::invalid("motion.scale", "must be positive"));
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(ConfigError::invalid("motion.offset", "must be finite"));
        }
        Ok(())
    }
}

/// Easing curve for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// How an element travels between poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Tween {
        duration: Duration,
        delay: Duration,
        easing: Easing,
    },
    Spring {
        stiffness: f32,
        damping: f32,
        delay: Duration,
    },
}

impl Transition {
    pub fn tween(duration: Duration) -> Self {
        Transition::Tween {
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn spring(stiffness: f32, damping: f32) -> Self {
        Transition::Spring {
            stiffness,
            damping,
            delay: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => *delay,
        }
    }

    pub fn with_delay(mut self, value: Duration) -> Self {
        match &mut self {
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => *delay = value,
        }
        self
    }

    /// Time until the element is considered settled.
    ///
    /// A unit-mass spring settles in roughly `8 / damping` seconds; the
    /// result is clamped to `[0.1s, 3s]`.
    pub fn settle_time(&self) -> Duration {
        match self {
            Transition::Tween { duration, .. } => *duration,
            Transition::Spring { damping, .. } => {
                Duration::from_secs_f32((8.0 / damping).clamp(0.1, 3.0))
            }
        }
    }

    fn timing_function(&self) -> &'static str {
        match self {
            Transition::Tween { easing, .. } => easing.css(),
            Transition::Spring {
                stiffness, damping, ..
            } => {
                // damping ratio below 1 overshoots
                if *damping < 2.0 * stiffness.sqrt() {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)"
                } else {
                    "ease-out"
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Transition::Tween { duration, .. } => {
                if duration.is_zero() || *duration > MAX_DURATION {
                    return Err(ConfigError::invalid(
                        "motion.duration",
                        format!("must be within (0, {}s]", MAX_DURATION.as_secs()),
                    ));
                }
            }
            Transition::Spring {
                stiffness, damping, ..
            } => {
                if !(*stiffness > 0.0 && stiffness.is_finite()) {
                    return Err(ConfigError::invalid("motion.stiffness", "must be positive"));
                }
                if !(*damping > 0.0 && damping.is_finite()) {
                    return Err(ConfigError::invalid("motion.damping", "must be positive"));
                }
            }
        }
        Ok(())
    }
}

/// A validated entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    hidden: Pose,
    visible: Pose,
    transition: Transition,
}

impl Motion {
    pub fn new(hidden: Pose, visible: Pose, transition: Transition) -> Result<Self, ConfigError> {
        hidden.validate()?;
        visible.validate()?;
        transition.validate()?;
        Ok(Self {
            hidden,
            visible,
            transition,
        })
    }

    /// Fade in while rising `offset` pixels.
    pub fn fade_up(offset: f32, duration: Duration) -> Result<Self, ConfigError> {
        Self::new(
            Pose::hidden().offset(0.0, offset),
            Pose::REST,
            Transition::tween(duration),
        )
    }

    /// Default scroll reveal: fade in while rising 20 pixels.
    pub fn reveal() -> Self {
        Self {
            hidden: Pose::hidden().offset(0.0, 20.0),
            visible: Pose::REST,
            transition: Transition::tween(Duration::from_millis(700)),
        }
    }

    /// Section titles drop in from above.
    pub fn title() -> Self {
        Self {
            hidden: Pose::hidden().offset(0.0, -20.0),
            visible: Pose::REST,
            transition: Transition::spring(100.0, 10.0),
        }
    }

    /// Project cards rise and grow slightly.
    pub fn card() -> Self {
        Self {
            hidden: Pose::hidden().offset(0.0, 50.0).scaled(0.95),
            visible: Pose::REST,
            transition: Transition::spring(80.0, 12.0),
        }
    }

    /// Forms and panels rise into place.
    pub fn panel() -> Self {
        Self {
            hidden: Pose::hidden().offset(0.0, 30.0),
            visible: Pose::REST,
            transition: Transition::spring(60.0, 15.0),
        }
    }

    /// Call-to-action buttons, shown after `delay`.
    pub fn button(delay: Duration) -> Self {
        Self {
            hidden: Pose::hidden().offset(0.0, 20.0),
            visible: Pose::REST,
            transition: Transition::spring(80.0, 10.0).with_delay(delay),
        }
    }

    /// Form inputs slide in from the left, one after another.
    pub fn slide_in(index: usize) -> Self {
        Self {
            hidden: Pose::hidden().offset(-20.0, 0.0),
            visible: Pose::REST,
            transition: Transition::spring(80.0, 12.0)
                .with_delay(Duration::from_millis(100) * index as u32),
        }
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn pose(&self, visible: bool) -> Pose {
        if visible { self.visible } else { self.hidden }
    }

    /// Copy of this motion starting `delay` later.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.transition = self.transition.with_delay(self.transition.delay() + delay);
        self
    }

    /// Inline CSS for the requested state.
    pub fn style(&self, visible: bool) -> String {
        let pose = self.pose(visible);
        let settle = self.transition.settle_time().as_secs_f32();
        let delay = self.transition.delay().as_secs_f32();
        let timing = self.transition.timing_function();

        let mut css = String::new();
        let _ = write!(
            css,
            "opacity: {}; transform: {}; transition: opacity {settle}s {timing} {delay}s, transform {settle}s {timing} {delay}s;",
            pose.opacity,
            pose.transform(),
        );
        css
    }
}

/// Child delays for a container that reveals its children one by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub each: Duration,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_children: Duration::from_millis(200),
            each: Duration::from_millis(150),
        }
    }
}

impl Stagger {
    /// Delay before the child at `index` starts.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.delay_children + self.each * index as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_opacity() {
        let hidden = Pose {
            opacity: 1.5,
            ..Pose::REST
        };
        let err = Motion::new(hidden, Pose::REST, Transition::tween(Duration::from_millis(300)));
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_zero_and_overlong_duration() {
        assert!(Motion::fade_up(20.0, Duration::ZERO).is_err());
        assert!(Motion::fade_up(20.0, Duration::from_secs(6)).is_err());
        assert!(Motion::fade_up(20.0, Duration::from_millis(700)).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spring() {
        let err = Motion::new(Pose::hidden(), Pose::REST, Transition::spring(0.0, 10.0));
        assert!(err.is_err());
    }

    #[test]
    fn test_presets_validate() {
        for motion in [
            Motion::reveal(),
            Motion::title(),
            Motion::card(),
            Motion::panel(),
            Motion::button(Duration::from_millis(600)),
            Motion::slide_in(2),
        ] {
            let rebuilt = Motion::new(motion.hidden, motion.visible, motion.transition);
            assert!(rebuilt.is_ok());
        }
    }

    #[test]
    fn test_style_switches_pose() {
        let motion = Motion::card();
        let hidden = motion.style(false);
        let visible = motion.style(true);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 50px) scale(0.95)"));
        assert!(visible.contains("opacity: 1;"));
        assert!(visible.contains("transform: none;"));
    }

    #[test]
    fn test_spring_settle_time_from_damping() {
        assert_eq!(
            Transition::spring(100.0, 10.0).settle_time(),
            Duration::from_secs_f32(0.8)
        );
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::default();
        assert_eq!(stagger.delay_for(0), Duration::from_millis(200));
        assert_eq!(stagger.delay_for(3), Duration::from_millis(650));
    }

    #[test]
    fn test_delayed_accumulates() {
        let motion = Motion::button(Duration::from_millis(500)).delayed(Duration::from_millis(100));
        assert_eq!(motion.transition().delay(), Duration::from_millis(600));
    }
}
