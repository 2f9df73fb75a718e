use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use chess_glance::api::PlayerSource;
use chess_glance::api::handlers::AppState;
use chess_glance::api::routes::create_router;
use chess_glance::config::AppConfig;
use chess_glance::domain::{PlayerProfile, Title};
use chess_glance::errors::GlanceError;

/// In-memory stand-in for the chess.com API
struct FixtureSource {
    rosters: HashMap<Title, Vec<String>>,
    profiles: HashMap<String, PlayerProfile>,
    roster_calls: AtomicUsize,
}

impl FixtureSource {
    fn new() -> Self {
        let gms = [
            "alireza2003",
            "anishgiri",
            "DanielNaroditsky",
            "FabianoCaruana",
            "GHANDEEVAM2003",
            "Hikaru",
            "MagnusCarlsen",
        ];
        let mut rosters = HashMap::new();
        rosters.insert(Title::GM, gms.iter().map(|s| s.to_string()).collect());
        rosters.insert(Title::IM, vec!["levyrozman".to_string()]);

        let mut profiles = HashMap::new();
        let hikaru: PlayerProfile = serde_json::from_value(serde_json::json!({
            "username": "hikaru",
            "name": "Hikaru Nakamura",
            "title": "GM",
            "country": "https://api.chess.com/pub/country/US",
            "joined": 1_389_043_258,
            "last_online": 1_700_000_000,
            "status": "premium"
        }))
        .unwrap();
        profiles.insert("hikaru".to_string(), hikaru);

        Self {
            rosters,
            profiles,
            roster_calls: AtomicUsize::new(0),
        }
    }
}

impl PlayerSource for FixtureSource {
    async fn titled_players(&self, title: Title) -> Result<Vec<String>, GlanceError> {
        self.roster_calls.fetch_add(1, Ordering::SeqCst);
        match self.rosters.get(&title) {
            Some(players) => Ok(players.clone()),
            None => Err(GlanceError::Upstream {
                status: 503,
                url: format!("fixture://titled/{}", title),
            }),
        }
    }

    async fn player_profile(&self, username: &str) -> Result<PlayerProfile, GlanceError> {
        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| GlanceError::NotFound(username.to_string()))
    }
}

fn app_with(source: Arc<FixtureSource>) -> axum::Router {
    let mut config = AppConfig::new();
    config.pagination.default_page_size = 3;
    config.pagination.max_page_size = 5;
    let state = AppState::new(source, config).unwrap();
    create_router(Arc::new(state))
}

fn app() -> axum::Router {
    app_with(Arc::new(FixtureSource::new()))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn usernames(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["username"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn lists_first_page_of_grandmasters_by_default() {
    let (status, body) = get(app(), "/api/players").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "GM");
    assert_eq!(body["total"], 7);
    assert_eq!(body["pageSize"], 3);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(
        usernames(&body),
        vec!["alireza2003", "anishgiri", "DanielNaroditsky"]
    );
    assert_eq!(body["items"][0]["rank"], 1);
    assert_eq!(body["items"][0]["profilePath"], "/api/player/alireza2003");
}

#[tokio::test]
async fn filters_by_case_insensitive_substring() {
    let (status, body) = get(app(), "/api/players?q=CAR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "car");
    assert_eq!(body["total"], 2);
    assert_eq!(usernames(&body), vec!["FabianoCaruana", "MagnusCarlsen"]);
}

#[tokio::test]
async fn pages_through_matches_with_running_rank() {
    let (_, body) = get(app(), "/api/players?page=3&page_size=3").await;

    assert_eq!(usernames(&body), vec!["MagnusCarlsen"]);
    assert_eq!(body["page"], 3);
    assert_eq!(body["items"][0]["rank"], 7);
}

#[tokio::test]
async fn offset_window_overrides_page() {
    let (_, body) = get(app(), "/api/players?page=1&offset=4&limit=2").await;

    assert_eq!(usernames(&body), vec!["GHANDEEVAM2003", "Hikaru"]);
    assert_eq!(body["offset"], 4);
    assert_eq!(body["items"][0]["rank"], 5);
}

#[tokio::test]
async fn page_size_is_clamped_to_maximum() {
    let (_, body) = get(app(), "/api/players?page_size=1000").await;
    assert_eq!(body["pageSize"], 5);
    assert_eq!(usernames(&body).len(), 5);
}

#[tokio::test]
async fn selects_other_titles() {
    let (status, body) = get(app(), "/api/players?title=im").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "IM");
    assert_eq!(usernames(&body), vec!["levyrozman"]);
}

#[tokio::test]
async fn unknown_title_is_bad_request() {
    let (status, body) = get(app(), "/api/players?title=XYZ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("XYZ"));
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let (status, body) = get(app(), "/api/players?title=WGM").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn roster_is_fetched_once_across_requests() {
    let source = Arc::new(FixtureSource::new());
    let app = app_with(Arc::clone(&source));

    get(app.clone(), "/api/players").await;
    get(app.clone(), "/api/players?q=hik").await;
    get(app.clone(), "/api/players?page=2").await;

    assert_eq!(source.roster_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn serves_profile_card() {
    let (status, body) = get(app(), "/api/player/Hikaru").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "hikaru");
    assert_eq!(body["displayName"], "Hikaru Nakamura");
    assert_eq!(body["handle"], "@hikaru");
    assert_eq!(body["countryCode"], "US");
    assert_eq!(body["joined"], "2014-01-06");
    assert_eq!(body["lastSeen"]["lastOnline"], 1_700_000_000);
    assert!(body["lastSeen"]["text"].as_str().unwrap().ends_with(" ago"));
}

#[tokio::test]
async fn missing_profile_is_not_found() {
    let (status, body) = get(app(), "/api/player/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nobody"));
}

#[tokio::test]
async fn malformed_username_is_bad_request() {
    let (status, _) = get(app(), "/api/player/bad%20name").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lists_supported_titles() {
    let (status, body) = get(app(), "/api/titles").await;
    assert_eq!(status, StatusCode::OK);
    let titles = body.as_array().unwrap();
    assert_eq!(titles.len(), 10);
    assert_eq!(titles[0]["abbreviation"], "GM");
    assert_eq!(titles[0]["name"], "Grandmaster");
}

#[tokio::test]
async fn directory_reports_loaded_rosters() {
    let app = app();
    let (_, before) = get(app.clone(), "/api/directory").await;
    assert_eq!(before["rosters"][0]["loaded"], false);

    get(app.clone(), "/api/players").await;

    let (_, after) = get(app, "/api/directory").await;
    assert_eq!(after["rosters"][0]["title"], "GM");
    assert_eq!(after["rosters"][0]["loaded"], true);
    assert_eq!(after["rosters"][0]["players"], 7);
}

#[tokio::test]
async fn non_numeric_page_is_json_bad_request() {
    let (status, body) = get(app(), "/api/players?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request parameter"));
}

#[tokio::test]
async fn negative_limit_is_json_bad_request() {
    let (status, body) = get(app(), "/api/players?offset=0&limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn directory_reports_last_load_error() {
    let app = app();
    get(app.clone(), "/api/players?title=WGM").await;

    let (_, body) = get(app, "/api/directory").await;
    let wgm = &body["rosters"][1];
    assert_eq!(wgm["title"], "WGM");
    assert_eq!(wgm["loaded"], false);
    assert_eq!(wgm["loading"], false);
    assert!(wgm["lastError"].as_str().unwrap().contains("503"));
    assert_eq!(body["rosters"][0]["lastError"], Value::Null);
}
