//! Project listing against a local mock of the repository API.

mod common;

use std::sync::Arc;

use common::{MockBackend, MockResponse};
use folio_core::config::GithubConfig;
use folio_core::projects::{FeedState, GithubClient, Paging, ProjectFeed, RepoSource};
use folio_core::FetchError;

const LISTING: &str = r#"[
    {"id": 1, "name": "weather-cli", "description": "Forecasts in the terminal", "html_url": "https://github.com/u/weather-cli"},
    {"id": 2, "name": "Portfolio", "description": null, "html_url": "https://github.com/u/Portfolio"},
    {"id": 3, "name": "notes", "description": "", "html_url": "https://github.com/u/notes"},
    {"id": 4, "name": "fitShe", "description": "Fitness tracker", "html_url": "https://github.com/u/fitShe"},
    {"id": 5, "name": "Naturro", "description": "Plant shop", "html_url": "https://github.com/u/Naturro"},
    {"id": 6, "name": "Dreamy", "html_url": "https://github.com/u/Dreamy"}
]"#;

fn github(backend: &MockBackend) -> GithubConfig {
    GithubConfig {
        user: "octocat".to_string(),
        api_base: backend.base_url(),
        timeout_secs: 5,
        ..GithubConfig::default()
    }
}

fn feed(client: GithubClient, config: &GithubConfig) -> ProjectFeed {
    ProjectFeed::new(Arc::new(client), config.priority.clone(), Paging::default())
}

fn names(state: &FeedState) -> Vec<String> {
    state
        .visible_projects()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

#[tokio::test]
async fn test_listing_is_requested_from_user_repos() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(LISTING)).await;
    let config = github(&backend);
    let client = GithubClient::new(&config).unwrap();
    assert_eq!(client.repos_url(), format!("{}/users/octocat/repos", backend.base_url()));

    let projects = client.list_repos().await.unwrap();
    assert_eq!(projects.len(), 6);

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/octocat/repos");
    assert_eq!(
        requests[0].accept.as_deref(),
        Some("application/vnd.github+json")
    );
}

#[tokio::test]
async fn test_feed_orders_and_pages() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(LISTING)).await;
    let config = github(&backend);
    let feed = feed(GithubClient::new(&config).unwrap(), &config);

    assert!(matches!(feed.state(), FeedState::Loading));

    let state = feed.load().await;
    assert_eq!(names(&state), ["fitShe", "Naturro", "Dreamy", "Portfolio"]);
    assert!(state.can_load_more());

    assert_eq!(state.load_more(), 6);
    assert_eq!(
        names(&state),
        ["fitShe", "Naturro", "Dreamy", "Portfolio", "weather-cli", "notes"]
    );
    assert!(!state.can_load_more());

    let shown = state.visible_projects();
    assert_eq!(shown[3].summary(), folio_core::projects::FALLBACK_DESCRIPTION);
    assert_eq!(shown[5].summary(), folio_core::projects::FALLBACK_DESCRIPTION);
    assert_eq!(shown[0].summary(), "Fitness tracker");
}

#[tokio::test]
async fn test_feed_fetches_only_once() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(LISTING)).await;
    let config = github(&backend);
    let feed = Arc::new(feed(GithubClient::new(&config).unwrap(), &config));

    let (a, b) = tokio::join!(feed.load(), feed.load());
    assert_eq!(names(&a), names(&b));

    let again = feed.load().await;
    again.load_more();
    assert!(matches!(feed.state(), FeedState::Ready { .. }));
    assert_eq!(backend.requests().await.len(), 1);
}

#[tokio::test]
async fn test_load_more_is_seen_by_every_reader() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(LISTING)).await;
    let config = github(&backend);
    let feed = feed(GithubClient::new(&config).unwrap(), &config);

    let (a, b) = tokio::join!(feed.load(), feed.load());
    assert_eq!(a.visible_projects().len(), 4);
    assert_eq!(a.load_more(), 6);

    assert_eq!(b.visible_projects().len(), 6);
    assert_eq!(feed.state().visible_projects().len(), 6);
    assert_eq!(feed.load().await.visible_projects().len(), 6);
    assert!(!feed.state().can_load_more());
    assert_eq!(backend.requests().await.len(), 1);
}

#[tokio::test]
async fn test_server_error_becomes_failed_state() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::status(500, r#"{"message":"boom"}"#))
        .await;
    let config = github(&backend);
    let client = GithubClient::new(&config).unwrap();
    let feed = feed(client, &config);

    let state = feed.load().await;
    assert_eq!(state.error(), Some("HTTP error! Status: 500"));
    assert!(state.visible_projects().is_empty());
    assert!(!state.can_load_more());

    // the failure is kept; no retry on a later load
    let state = feed.load().await;
    assert!(state.error().is_some());
    assert_eq!(backend.requests().await.len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(r#"{"not": "a list"}"#)).await;
    let client = GithubClient::new(&github(&backend)).unwrap();

    let err = client.list_repos().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    let config = GithubConfig {
        api_base: common::closed_port_url().await,
        timeout_secs: 2,
        ..GithubConfig::default()
    };
    let client = GithubClient::new(&config).unwrap();

    let err = client.list_repos().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
