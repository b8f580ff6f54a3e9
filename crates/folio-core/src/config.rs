//! Site configuration.
//!
//! Loaded from an optional TOML file, then overridden by `FOLIO_*`
//! environment variables. The e-mail relay identifiers have no defaults and
//! are checked when the relay client is built.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::projects::{DEFAULT_PRIORITY, Paging};
use crate::roles::DEFAULT_ROLE_INTERVAL;
use crate::splash::{DEFAULT_COMPLETION_DELAY, DEFAULT_FRAME_INTERVAL, DEFAULT_SPLASH_TEXT, SplashConfig};

/// EmailJS REST endpoint used when none is configured.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const ENV_GITHUB_USER: &str = "FOLIO_GITHUB_USER";
pub const ENV_GITHUB_API: &str = "FOLIO_GITHUB_API";
pub const ENV_RELAY_ENDPOINT: &str = "FOLIO_RELAY_ENDPOINT";
pub const ENV_SERVICE_ID: &str = "FOLIO_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "FOLIO_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "FOLIO_PUBLIC_KEY";
pub const ENV_RESUME: &str = "FOLIO_RESUME";

/// Top-level configuration for the portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github: GithubConfig,
    pub relay: RelayConfig,
    pub timing: TimingConfig,
    /// Résumé offered for download; the button is hidden when unset.
    pub resume_path: Option<PathBuf>,
}

/// Repository listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub user: String,
    pub api_base: String,
    /// Repository names pinned to the front, in order.
    pub priority: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            user: "cRohinic".to_string(),
            api_base: "https://api.github.com".to_string(),
            priority: DEFAULT_PRIORITY.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 15,
        }
    }
}

/// E-mail relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: None,
            template_id: None,
            public_key: None,
            timeout_secs: 15,
        }
    }
}

/// Relay identifiers after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout: Duration,
}

impl RelayConfig {
    /// Checks that every identifier is present and non-blank.
    pub fn credentials(&self) -> Result<RelayCredentials, ConfigError> {
        fn required(
            value: &Option<String>,
            key: &'static str,
            env: &'static str,
        ) -> Result<String, ConfigError> {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(ConfigError::Missing { key, env }),
            }
        }

        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "relay.endpoint",
                env: ENV_RELAY_ENDPOINT,
            });
        }

        Ok(RelayCredentials {
            endpoint: self.endpoint.trim().to_string(),
            service_id: required(&self.service_id, "relay.service_id", ENV_SERVICE_ID)?,
            template_id: required(&self.template_id, "relay.template_id", ENV_TEMPLATE_ID)?,
            public_key: required(&self.public_key, "relay.public_key", ENV_PUBLIC_KEY)?,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        })
    }
}

/// Animation timing and pagination sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub splash_text: String,
    pub splash_interval_ms: u64,
    pub splash_delay_ms: u64,
    pub role_interval_ms: u64,
    pub page_size: usize,
    pub page_step: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let paging = Paging::default();
        Self {
            splash_text: DEFAULT_SPLASH_TEXT.to_string(),
            splash_interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
            splash_delay_ms: DEFAULT_COMPLETION_DELAY.as_millis() as u64,
            role_interval_ms: DEFAULT_ROLE_INTERVAL.as_millis() as u64,
            page_size: paging.initial,
            page_step: paging.step,
        }
    }
}

impl SiteConfig {
    /// Reads `path` when given (defaults otherwise) and applies environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies `FOLIO_*` overrides using `lookup` to resolve variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(user) = lookup(ENV_GITHUB_USER) {
            self.github.user = user;
        }
        if let Some(api) = lookup(ENV_GITHUB_API) {
            self.github.api_base = api;
        }
        if let Some(endpoint) = lookup(ENV_RELAY_ENDPOINT) {
            self.relay.endpoint = endpoint;
        }
        if let Some(service) = lookup(ENV_SERVICE_ID) {
            self.relay.service_id = Some(service);
        }
        if let Some(template) = lookup(ENV_TEMPLATE_ID) {
            self.relay.template_id = Some(template);
        }
        if let Some(key) = lookup(ENV_PUBLIC_KEY) {
            self.relay.public_key = Some(key);
        }
        if let Some(resume) = lookup(ENV_RESUME) {
            self.resume_path = Some(PathBuf::from(resume));
        }
    }

    /// Checks values that would otherwise fail deep inside a component.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github.user.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "github.user",
                env: ENV_GITHUB_USER,
            });
        }
        self.paging()?;
        self.splash().validate()?;
        if self.timing.role_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "timing.role_interval_ms",
                "must be at least 1ms",
            ));
        }
        Ok(())
    }

    pub fn splash(&self) -> SplashConfig {
        SplashConfig {
            text: self.timing.splash_text.clone(),
            frame_interval: Duration::from_millis(self.timing.splash_interval_ms),
            completion_delay: Duration::from_millis(self.timing.splash_delay_ms),
        }
    }

    /// Validated relay identifiers; `ConfigError::Missing` names the first
    /// absent one.
    pub fn relay(&self) -> Result<RelayCredentials, ConfigError> {
        self.relay.credentials()
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.timing.role_interval_ms)
    }

    pub fn paging(&self) -> Result<Paging, ConfigError> {
        Paging::new(self.timing.page_size, self.timing.page_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.github.user, "cRohinic");
        assert_eq!(config.github.priority, ["fitShe", "Naturro", "Dreamy", "Portfolio"]);
        assert_eq!(config.timing.splash_interval_ms, 100);
        assert_eq!(config.timing.splash_delay_ms, 1000);
        assert_eq!(config.timing.role_interval_ms, 2000);
        assert_eq!(config.timing.page_size, 4);
        assert_eq!(config.timing.page_step, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_relay_credentials_require_all_ids() {
        let mut config = SiteConfig::default();
        config.apply_overrides(env(&[
            (ENV_SERVICE_ID, "service_x"),
            (ENV_TEMPLATE_ID, "template_y"),
        ]));

        let err = config.relay.credentials().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                key: "relay.public_key",
                ..
            }
        ));

        config.apply_overrides(env(&[(ENV_PUBLIC_KEY, "pk_z")]));
        let creds = config.relay.credentials().unwrap();
        assert_eq!(creds.service_id, "service_x");
        assert_eq!(creds.template_id, "template_y");
        assert_eq!(creds.public_key, "pk_z");
        assert_eq!(creds.endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn test_blank_identifier_counts_as_missing() {
        let mut config = SiteConfig::default();
        config.apply_overrides(env(&[
            (ENV_SERVICE_ID, "   "),
            (ENV_TEMPLATE_ID, "t"),
            (ENV_PUBLIC_KEY, "k"),
        ]));
        assert!(matches!(
            config.relay.credentials(),
            Err(ConfigError::Missing {
                key: "relay.service_id",
                ..
            })
        ));
    }

    #[test]
    fn test_toml_overrides_and_partial_tables() {
        let config = SiteConfig::from_toml_str(
            r#"
            resume_path = "assets/resume.pdf"

            [github]
            user = "octocat"

            [timing]
            page_size = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.github.user, "octocat");
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.timing.page_size, 6);
        assert_eq!(config.timing.page_step, 4);
        assert_eq!(config.resume_path, Some(PathBuf::from("assets/resume.pdf")));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("[github\nuser = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_step_rejected() {
        let mut config = SiteConfig::default();
        config.timing.page_step = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = SiteConfig::from_toml_str("[github]\nuser = \"from-file\"").unwrap();
        config.apply_overrides(env(&[(ENV_GITHUB_USER, "from-env"), (ENV_RESUME, "/tmp/cv.pdf")]));
        assert_eq!(config.github.user, "from-env");
        assert_eq!(config.resume_path, Some(PathBuf::from("/tmp/cv.pdf")));
    }
}
