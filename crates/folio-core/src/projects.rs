//! Project listing: fetch, priority ordering and pagination.
//!
//! The listing is requested once per [`ProjectFeed`]. Pagination is a local
//! cursor over the already ordered list and never triggers another request.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::GithubConfig;
use crate::error::{ConfigError, FetchError};

/// Repository names pinned to the front of the list, in order.
pub const DEFAULT_PRIORITY: [&str; 4] = ["fitShe", "Naturro", "Dreamy", "Portfolio"];

/// Shown for repositories without a description.
pub const FALLBACK_DESCRIPTION: &str =
    "A specialized development project with details available on repository.";

/// A repository as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
}

impl Project {
    /// Description, or the generic fallback when the repository has none.
    pub fn summary(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => FALLBACK_DESCRIPTION,
        }
    }
}

/// Stable sort that moves `priority` names to the front in the given order.
///
/// Everything not named keeps its arrival order. Applying it twice gives the
/// same list as applying it once.
pub fn priority_order<S: AsRef<str>>(mut projects: Vec<Project>, priority: &[S]) -> Vec<Project> {
    projects.sort_by_key(|p| {
        priority
            .iter()
            .position(|name| name.as_ref() == p.name)
            .unwrap_or(usize::MAX)
    });
    projects
}

/// Source of repository listings.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self) -> Result<Vec<Project>, FetchError>;
}

/// Lists public repositories through the GitHub REST API.
pub struct GithubClient {
    client: reqwest::Client,
    repos_url: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ConfigError::invalid("github", format!("http client: {e}")))?;
        let repos_url = format!(
            "{}/users/{}/repos",
            config.api_base.trim_end_matches('/'),
            config.user
        );
        Ok(Self { client, repos_url })
    }

    pub fn repos_url(&self) -> &str {
        &self.repos_url
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn list_repos(&self) -> Result<Vec<Project>, FetchError> {
        info!(url = %self.repos_url, "Fetching project listing");

        let response = self
            .client
            .get(&self.repos_url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Project listing request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Project>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Initial page size and increment of the pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub initial: usize,
    pub step: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            initial: 4,
            step: 4,
        }
    }
}

impl Paging {
    pub fn new(initial: usize, step: usize) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::invalid("timing.page_step", "must be at least 1"));
        }
        Ok(Self { initial, step })
    }
}

/// Count of items currently shown from a list of `total` items.
///
/// Starts at `min(initial, total)` and only grows, by `step`, never past
/// `total`. Advancing is a single atomic update, so concurrent "load more"
/// requests each move the cursor by exactly one step.
#[derive(Debug)]
pub struct PageCursor {
    paging: Paging,
    total: usize,
    visible: AtomicUsize,
}

impl PageCursor {
    pub fn new(total: usize, paging: Paging) -> Self {
        Self {
            paging,
            total,
            visible: AtomicUsize::new(paging.initial.min(total)),
        }
    }

    pub fn visible(&self) -> usize {
        self.visible.load(Ordering::Acquire)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the "load more" action is available.
    pub fn has_more(&self) -> bool {
        self.visible() < self.total
    }

    /// Reveals one more page and returns the new visible count.
    pub fn load_more(&self) -> usize {
        let step = self.paging.step;
        let total = self.total;
        match self
            .visible
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
                (v < total).then(|| v.saturating_add(step).min(total))
            }) {
            Ok(previous) => previous.saturating_add(step).min(total),
            Err(current) => current,
        }
    }
}

impl Clone for PageCursor {
    fn clone(&self) -> Self {
        Self {
            paging: self.paging,
            total: self.total,
            visible: AtomicUsize::new(self.visible()),
        }
    }
}

/// A fetched, ordered listing and the single cursor paging through it.
#[derive(Debug, Clone)]
pub struct Listing {
    projects: Arc<[Project]>,
    cursor: Arc<PageCursor>,
}

impl Listing {
    pub fn new(projects: Vec<Project>, paging: Paging) -> Self {
        let cursor = Arc::new(PageCursor::new(projects.len(), paging));
        Self {
            projects: projects.into(),
            cursor,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }
}

/// What the projects section renders.
#[derive(Debug, Clone)]
pub enum FeedState {
    Loading,
    Ready {
        projects: Arc<[Project]>,
        cursor: Arc<PageCursor>,
    },
    Failed(String),
}

impl FeedState {
    /// Builds the render state from a finished fetch. Every state built from
    /// the same listing shares its cursor.
    pub fn from_result(result: &Result<Listing, FetchError>) -> Self {
        match result {
            Ok(listing) => FeedState::Ready {
                projects: listing.projects.clone(),
                cursor: listing.cursor.clone(),
            },
            Err(e) => FeedState::Failed(e.to_string()),
        }
    }

    /// Projects currently on screen; empty unless ready.
    pub fn visible_projects(&self) -> &[Project] {
        match self {
            FeedState::Ready { projects, cursor } => &projects[..cursor.visible()],
            _ => &[],
        }
    }

    pub fn can_load_more(&self) -> bool {
        matches!(self, FeedState::Ready { cursor, .. } if cursor.has_more())
    }

    /// Advances the cursor when ready; a no-op in any other state.
    pub fn load_more(&self) -> usize {
        match self {
            FeedState::Ready { cursor, .. } => cursor.load_more(),
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FeedState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// One-shot project listing with priority ordering.
pub struct ProjectFeed {
    source: Arc<dyn RepoSource>,
    priority: Vec<String>,
    paging: Paging,
    fetched: OnceCell<Result<Listing, FetchError>>,
}

impl ProjectFeed {
    pub fn new(source: Arc<dyn RepoSource>, priority: Vec<String>, paging: Paging) -> Self {
        Self {
            source,
            priority,
            paging,
            fetched: OnceCell::new(),
        }
    }

    /// Fetches and orders the listing on first call; later calls (including
    /// concurrent ones) reuse that outcome without another request.
    pub async fn load(&self) -> FeedState {
        let result = self
            .fetched
            .get_or_init(|| async {
                match self.source.list_repos().await {
                    Ok(projects) => {
                        info!(count = projects.len(), "Project listing loaded");
                        let ordered = priority_order(projects, self.priority.as_slice());
                        Ok(Listing::new(ordered, self.paging))
                    }
                    Err(e) => {
                        warn!(error = %e, "Project listing unavailable");
                        Err(e)
                    }
                }
            })
            .await;
        FeedState::from_result(result)
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Current state without triggering a fetch.
    pub fn state(&self) -> FeedState {
        match self.fetched.get() {
            Some(result) => FeedState::from_result(result),
            None => FeedState::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn project(id: u64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/example/{name}"),
        }
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_priority_names_first_in_fixed_order() {
        let arrival = ["other1", "Portfolio", "Dreamy", "other2", "Naturro", "fitShe"];
        let projects = arrival
            .iter()
            .enumerate()
            .map(|(i, n)| project(i as u64, n))
            .collect();

        let ordered = priority_order(projects, &DEFAULT_PRIORITY);

        assert_eq!(
            names(&ordered),
            ["fitShe", "Naturro", "Dreamy", "Portfolio", "other1", "other2"]
        );
    }

    #[test]
    fn test_priority_order_is_idempotent() {
        let arrival = ["z", "Dreamy", "a", "fitShe", "m"];
        let projects: Vec<_> = arrival
            .iter()
            .enumerate()
            .map(|(i, n)| project(i as u64, n))
            .collect();

        let once = priority_order(projects, &DEFAULT_PRIORITY);
        let twice = priority_order(once.clone(), &DEFAULT_PRIORITY);
        assert_eq!(once, twice);
        assert_eq!(names(&once), ["fitShe", "Dreamy", "z", "a", "m"]);
    }

    #[test]
    fn test_summary_falls_back() {
        let mut p = project(1, "x");
        assert_eq!(p.summary(), FALLBACK_DESCRIPTION);
        p.description = Some("  ".into());
        assert_eq!(p.summary(), FALLBACK_DESCRIPTION);
        p.description = Some("A shop".into());
        assert_eq!(p.summary(), "A shop");
    }

    #[test]
    fn test_cursor_follows_min_formula() {
        for total in 0..15 {
            let cursor = PageCursor::new(total, Paging::default());
            for k in 0..6 {
                let expected = (4 + k * 4).min(total);
                assert_eq!(cursor.visible(), expected);
                assert_eq!(cursor.has_more(), expected != total);
                cursor.load_more();
            }
        }
    }

    #[test]
    fn test_load_more_clamps_at_total() {
        let cursor = PageCursor::new(6, Paging::default());
        assert_eq!(cursor.load_more(), 6);
        assert_eq!(cursor.load_more(), 6);
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_concurrent_load_more_advances_once_each() {
        let cursor = Arc::new(PageCursor::new(1000, Paging::new(4, 4).unwrap()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cursor = cursor.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        cursor.load_more();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cursor.visible(), 4 + 80 * 4);
    }

    #[test]
    fn test_failed_state_shows_nothing() {
        let state = FeedState::from_result(&Err(FetchError::Status(500)));
        assert!(state.visible_projects().is_empty());
        assert!(!state.can_load_more());
        assert_eq!(state.error(), Some("HTTP error! Status: 500"));
        assert_eq!(state.load_more(), 0);
    }

    #[test]
    fn test_states_from_one_listing_share_the_cursor() {
        let listing: Result<Listing, FetchError> = Ok(Listing::new(
            (0..10).map(|i| project(i, &format!("repo-{i}"))).collect(),
            Paging::default(),
        ));
        let first = FeedState::from_result(&listing);
        let second = FeedState::from_result(&listing);

        assert_eq!(first.load_more(), 8);
        assert_eq!(second.visible_projects().len(), 8);
        assert_eq!(listing.as_ref().unwrap().cursor().visible(), 8);
    }

    #[test]
    fn test_project_parses_listing_shape() {
        let raw = r#"[
            {"id": 7, "name": "fitShe", "description": null, "html_url": "https://github.com/u/fitShe", "fork": false},
            {"id": 8, "name": "Dreamy", "html_url": "https://github.com/u/Dreamy"}
        ]"#;
        let parsed: Vec<Project> = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed[0].url, "https://github.com/u/fitShe");
        assert_eq!(parsed[1].description, None);
    }
}
