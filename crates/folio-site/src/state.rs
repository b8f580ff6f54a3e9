//! Shared services and app phase.

use std::sync::{Arc, OnceLock};

use folio_core::{
    ConfigError, EmailJsRelay, GithubClient, MailRelay, ProjectFeed, ResumeAsset, RoleCycle,
    SiteConfig,
};
use tracing::{info, warn};

/// Top-level app phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPhase {
    /// Typing splash on screen
    Splash,
    /// Sections rendered
    Ready,
}

/// Clients and settings shared by every section through Dioxus context.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<SiteConfig>,
    pub feed: Arc<ProjectFeed>,
    /// Holds the configuration error when the relay identifiers are missing;
    /// submissions then fail with that message.
    pub relay: Result<Arc<dyn MailRelay>, String>,
    pub resume: Option<ResumeAsset>,
    pub roles: RoleCycle,
}

impl Services {
    /// Builds the HTTP clients for `config`.
    ///
    /// A missing relay identifier only disables the contact form; any other
    /// configuration error is returned.
    pub fn from_config(config: SiteConfig) -> Result<Self, ConfigError> {
        let client = GithubClient::new(&config.github)?;
        info!(url = client.repos_url(), "Project source ready");
        let feed = ProjectFeed::new(
            Arc::new(client),
            config.github.priority.clone(),
            config.paging()?,
        );

        let relay = match config.relay() {
            Ok(credentials) => {
                let relay: Arc<dyn MailRelay> = Arc::new(EmailJsRelay::new(credentials)?);
                Ok(relay)
            }
            Err(e @ ConfigError::Missing { .. }) => {
                warn!(error = %e, "Contact form disabled");
                Err(e.to_string())
            }
            Err(e) => return Err(e),
        };

        let resume = ResumeAsset::from_config(config.resume_path.as_deref()).ok();

        Ok(Self {
            config: Arc::new(config),
            feed: Arc::new(feed),
            relay,
            resume,
            roles: RoleCycle::default_roles(),
        })
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config) && Arc::ptr_eq(&self.feed, &other.feed)
    }
}

/// Global storage for the services built in `main`.
static SERVICES: OnceLock<Services> = OnceLock::new();

/// Installs the services; later calls are ignored.
pub fn install(services: Services) {
    if SERVICES.set(services).is_err() {
        warn!("Services already installed");
    }
}

pub fn services() -> Option<&'static Services> {
    SERVICES.get()
}
