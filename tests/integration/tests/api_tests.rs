//! API Integration Tests
//!
//! Each test spawns the full router over an in-memory store; no database is
//! needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::Value;

async fn start(store: InMemoryStore) -> TestServer {
    let (_store, context) = store.into_context();
    TestServer::start(context).await.expect("Failed to start server")
}

fn discovery_store() -> InMemoryStore {
    let mut free = micro_meet("free-tech", "Tech");
    free.price = Some(0.0);
    free.date = Some(date_in(30));

    let mut small = micro_meet("small-tech", "Tech");
    small.max_spots = Some(6);

    InMemoryStore::new()
        .with_profile(profile("alice", &["Tech", "AI"]))
        .with_event(small)
        .with_event(micro_meet("pottery", "Pottery"))
        .with_event(event("regular-music", "Music"))
        .with_event(free)
        .with_rsvp("small-tech", "bob")
        .with_saved("free-tech", "alice")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = start(InMemoryStore::new()).await;

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let server = start(InMemoryStore::new()).await;

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_events_have_no_match_fields() {
    let server = start(discovery_store()).await;

    let response = server.get("/api/v1/events").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let events = body["data"].as_array().unwrap();

    assert_eq!(events.len(), 4);
    for event in events {
        assert!(event.get("matchScore").is_none());
        assert!(event.get("matchTags").is_none());
        assert_eq!(event["isJoined"], false);
        assert_eq!(event["isSaved"], false);
    }

    let small = events.iter().find(|e| e["id"] == "small-tech").unwrap();
    assert_eq!(small["attendeeCount"], 1);
    assert_eq!(small["maxSpots"], 6);
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let server = start(discovery_store()).await;

    let response = server
        .get_auth("/api/v1/events", "not-a-real-token")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e.get("matchScore").is_none()));
}

#[tokio::test]
async fn test_authenticated_events_score_micro_meets_only() {
    let server = start(discovery_store()).await;
    let token = server.token_for("alice").unwrap();

    let response = server.get_auth("/api/v1/events", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    for event in body["data"].as_array().unwrap() {
        let is_micro = event["isMicroMeet"].as_bool().unwrap();
        assert_eq!(event.get("matchScore").is_some(), is_micro, "{}", event["id"]);
    }

    let free = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == "free-tech")
        .unwrap();
    assert_eq!(free["isSaved"], true);
}

#[tokio::test]
async fn test_event_filters() {
    let server = start(discovery_store()).await;

    let response = server
        .get("/api/v1/events?micro_meets_only=true&category=tech")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["small-tech", "free-tech"]);
}

#[tokio::test]
async fn test_limit_out_of_range_is_rejected() {
    let server = start(discovery_store()).await;

    let response = server.get("/api/v1/events?limit=500").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = server.get("/api/v1/events?limit=ten").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Match Tests
// ============================================================================

#[tokio::test]
async fn test_matches_require_authentication() {
    let server = start(discovery_store()).await;

    let response = server.get("/api/v1/micro-meets/matches").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/micro-meets/matches", "garbage")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_matches_are_sorted_and_above_threshold() {
    let server = start(discovery_store()).await;
    let token = server.token_for("alice").unwrap();

    let response = server
        .get_auth("/api/v1/micro-meets/matches", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let matches = body["data"].as_array().unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["free-tech", "small-tech"]);

    let scores: Vec<u64> = matches
        .iter()
        .map(|m| m["matchScore"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| *s >= 30));

    for m in matches {
        let tags = m["matchTags"].as_array().unwrap();
        assert!((1..=2).contains(&tags.len()));
    }
}

#[tokio::test]
async fn test_matches_without_profile_is_not_found() {
    let server = start(discovery_store()).await;
    let token = server.token_for("stranger").unwrap();

    let response = server
        .get_auth("/api/v1/micro-meets/matches", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_reactions() {
    let store = InMemoryStore::new()
        .with_post(post("p1", "bob", 1))
        .with_post(post("p2", "carol", 2))
        .with_reaction("p1", "alice", "🔥")
        .with_reaction("p1", "bob", "🔥");
    let server = start(store).await;
    let token = server.token_for("alice").unwrap();

    let response = server.get_auth("/api/v1/feed", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let posts = body["data"].as_array().unwrap();

    assert_eq!(posts[0]["id"], "p1");
    assert_eq!(posts[0]["reactions"]["🔥"], 2);
    assert_eq!(posts[0]["myReactions"], serde_json::json!(["🔥"]));
    assert_eq!(posts[1]["reactions"], serde_json::json!({}));
    assert_eq!(body["hasMore"], false);
    assert!(body.get("nextBefore").is_none());
}

#[tokio::test]
async fn test_feed_pagination() {
    let store = InMemoryStore::new()
        .with_post(post("p1", "bob", 1))
        .with_post(post("p2", "bob", 2))
        .with_post(post("p3", "bob", 3));
    let server = start(store).await;

    let response = server.get("/api/v1/feed?limit=2").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["hasMore"], true);
    assert_eq!(body["nextBefore"], "p2");

    let response = server.get("/api/v1/feed?limit=2&before=p2").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"][0]["id"], "p3");
    assert_eq!(body["hasMore"], false);
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_communities_with_membership() {
    let store = InMemoryStore::new()
        .with_community(community("c1", "Board gamers"))
        .with_community(community("c2", "Climbers"))
        .with_member("c1", "alice")
        .with_member("c1", "bob");
    let server = start(store).await;
    let token = server.token_for("alice").unwrap();

    let response = server.get_auth("/api/v1/communities", &token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let communities = body["data"].as_array().unwrap();

    assert_eq!(communities[0]["name"], "Board gamers");
    assert_eq!(communities[0]["memberCount"], 2);
    assert_eq!(communities[0]["isMember"], true);
    assert_eq!(communities[1]["memberCount"], 0);
    assert_eq!(communities[1]["isMember"], false);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_store_failure_is_reported_generically() {
    let (store, context) = discovery_store().into_context();
    let server = TestServer::start(context).await.unwrap();
    store.fail_lookups();

    let response = server.get("/api/v1/feed").await.unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["error"]["code"], "LOAD_FAILED");
    assert_eq!(body["error"]["message"], "Failed to load feed");
    assert!(!body.to_string().contains("simulated"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = start(InMemoryStore::new()).await;

    let response = server.get("/api/v1/unknown").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
