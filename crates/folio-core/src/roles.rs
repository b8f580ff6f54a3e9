//! Rotating role headline.

use std::time::Duration;

use crate::error::ConfigError;
use crate::schedule::{ScheduledTask, Tick};

/// Roles shown under the hero heading, in display order.
pub const DEFAULT_ROLES: [&str; 4] = [
    "MERN Stack Developer",
    "Frontend Developer",
    "Web Developer",
    "Backend Developer",
];

/// Time each role stays on screen.
pub const DEFAULT_ROLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Cursor over a fixed, non-empty list of roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCycle {
    roles: Vec<String>,
    index: usize,
}

impl RoleCycle {
    pub fn new<I, S>(roles: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(ConfigError::invalid("roles", "role list must not be empty"));
        }
        Ok(Self { roles, index: 0 })
    }

    /// The built-in role list.
    pub fn default_roles() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            index: 0,
        }
    }

    /// Moves to the next role, wrapping at the end, and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.roles.len();
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.roles[self.index]
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Advances `cycle` every `interval` and reports the new index.
///
/// Runs until the returned handle is cancelled or dropped.
pub fn start_cycler<F>(mut cycle: RoleCycle, interval: Duration, mut on_index: F) -> ScheduledTask
where
    F: FnMut(usize) + Send + 'static,
{
    ScheduledTask::repeating("role-cycler", interval, move |_| {
        on_index(cycle.advance());
        Tick::Continue
    })
}
