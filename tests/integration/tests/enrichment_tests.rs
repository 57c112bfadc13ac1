//! Enrichment and discovery tests over the in-memory store
//!
//! Run with: cargo test -p integration-tests --test enrichment_tests

use chrono::NaiveDate;
use gather_core::{
    CompatibilityScorer, DomainError, Event, EventMatch, EventQuery, PostQuery, UserId,
    MIN_MATCH_SCORE,
};
use gather_service::{DiscoveryService, EnrichmentService, ServiceError};
use integration_tests::fixtures::*;

fn scorer() -> CompatibilityScorer {
    CompatibilityScorer::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
}

fn events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                micro_meet(&format!("e{i}"), "Tech")
            } else {
                event(&format!("e{i}"), "Music")
            }
        })
        .collect()
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_empty_batch_issues_no_lookups() {
    let (store, ctx) = InMemoryStore::new().into_context();
    let service = EnrichmentService::with_scorer(&ctx, scorer());

    let enriched = service
        .enrich_events(Vec::new(), Some(&UserId::new("alice")))
        .await
        .unwrap();

    assert!(enriched.is_empty());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_lookup_count_is_independent_of_batch_size() {
    for size in [10, 1000] {
        let (store, ctx) = InMemoryStore::new()
            .with_profile(profile("alice", &["Tech"]))
            .into_context();
        let service = EnrichmentService::with_scorer(&ctx, scorer());

        let enriched = service
            .enrich_events(events(size), Some(&UserId::new("alice")))
            .await
            .unwrap();

        assert_eq!(enriched.len(), size);
        assert!(store.calls() <= 4, "batch of {size} issued {} lookups", store.calls());
    }
}

#[tokio::test]
async fn test_anonymous_enrichment_has_no_actor_data() {
    let (store, ctx) = InMemoryStore::new()
        .with_rsvp("e0", "bob")
        .with_rsvp("e0", "carol")
        .with_saved("e0", "bob")
        .into_context();
    let service = EnrichmentService::with_scorer(&ctx, scorer());

    let enriched = service.enrich_events(events(3), None).await.unwrap();

    assert_eq!(store.calls(), 1);
    assert_eq!(enriched[0].attendee_count, 2);
    assert_eq!(enriched[1].attendee_count, 0);
    for item in &enriched {
        assert!(!item.is_joined);
        assert!(!item.is_saved);
        assert_eq!(item.compatibility, EventMatch::NotApplicable);
    }
}

#[tokio::test]
async fn test_actor_flags_and_matches() {
    let (_store, ctx) = InMemoryStore::new()
        .with_profile(profile("alice", &["Tech", "AI"]))
        .with_rsvp("e0", "alice")
        .with_rsvp("e0", "bob")
        .with_saved("e1", "alice")
        .with_saved("e0", "bob")
        .into_context();
    let service = EnrichmentService::with_scorer(&ctx, scorer());

    let enriched = service
        .enrich_events(events(2), Some(&UserId::new("alice")))
        .await
        .unwrap();

    let (meet, regular) = (&enriched[0], &enriched[1]);
    assert_eq!(meet.attendee_count, 2);
    assert!(meet.is_joined);
    assert!(!meet.is_saved);
    assert!(meet.compatibility.is_scored());

    assert!(!regular.is_joined);
    assert!(regular.is_saved);
    assert_eq!(regular.compatibility, EventMatch::NotApplicable);
}

#[tokio::test]
async fn test_actor_without_profile_gets_no_matches() {
    let (_store, ctx) = InMemoryStore::new().into_context();
    let service = EnrichmentService::with_scorer(&ctx, scorer());

    let enriched = service
        .enrich_events(events(2), Some(&UserId::new("ghost")))
        .await
        .unwrap();

    assert!(enriched.iter().all(|e| !e.compatibility.is_scored()));
}

#[tokio::test]
async fn test_lookup_failure_fails_the_batch() {
    let (store, ctx) = InMemoryStore::new().into_context();
    store.fail_lookups();
    let service = EnrichmentService::with_scorer(&ctx, scorer());

    let err = service
        .enrich_events(events(4), Some(&UserId::new("alice")))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::LoadFailed { resource: "events", .. }));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_string(), "Failed to load events");
}

#[tokio::test]
async fn test_one_failing_relation_fails_the_event_batch() {
    for failing in [
        Lookup::RsvpCounts,
        Lookup::RsvpJoined,
        Lookup::SavedEvents,
        Lookup::Profile,
    ] {
        let (store, ctx) = InMemoryStore::new()
            .with_profile(profile("alice", &["Tech"]))
            .with_rsvp("e0", "alice")
            .with_saved("e1", "alice")
            .into_context();
        store.fail_lookup(failing);
        let service = EnrichmentService::with_scorer(&ctx, scorer());

        let result = service
            .enrich_events(events(4), Some(&UserId::new("alice")))
            .await;

        match result {
            Err(ServiceError::LoadFailed { resource, .. }) => assert_eq!(resource, "events"),
            other => panic!("{failing:?} failing should fail the batch, got {other:?}"),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_post_reactions_are_grouped_in_one_lookup() {
    let (store, ctx) = InMemoryStore::new()
        .with_reaction("p1", "alice", "🔥")
        .with_reaction("p1", "bob", "🔥")
        .with_reaction("p1", "alice", "🎉")
        .into_context();
    let service = EnrichmentService::new(&ctx);

    let posts = vec![post("p1", "bob", 5), post("p2", "carol", 10)];
    let enriched = service
        .enrich_posts(posts, Some(&UserId::new("alice")))
        .await
        .unwrap();

    assert_eq!(store.calls(), 1);
    assert_eq!(enriched[0].reactions["🔥"], 2);
    assert_eq!(enriched[0].reactions["🎉"], 1);
    assert_eq!(enriched[0].my_reactions, vec!["🔥", "🎉"]);

    assert!(enriched[1].reactions.is_empty());
    assert!(enriched[1].my_reactions.is_empty());
}

#[tokio::test]
async fn test_anonymous_posts_have_no_own_reactions() {
    let (_store, ctx) = InMemoryStore::new()
        .with_reaction("p1", "alice", "🔥")
        .into_context();
    let service = EnrichmentService::new(&ctx);

    let enriched = service
        .enrich_posts(vec![post("p1", "bob", 1)], None)
        .await
        .unwrap();

    assert_eq!(enriched[0].total_reactions(), 1);
    assert!(enriched[0].my_reactions.is_empty());
}

// ============================================================================
// Communities
// ============================================================================

#[tokio::test]
async fn test_community_counts_and_membership() {
    let (store, ctx) = InMemoryStore::new()
        .with_member("c1", "alice")
        .with_member("c1", "bob")
        .with_member("c2", "bob")
        .into_context();
    let service = EnrichmentService::new(&ctx);
    let communities = vec![community("c1", "Runners"), community("c2", "Readers"), community("c3", "Empty")];

    let anonymous = service
        .enrich_communities(communities.clone(), None)
        .await
        .unwrap();
    assert_eq!(store.calls(), 1);
    assert_eq!(
        anonymous.iter().map(|c| c.member_count).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
    assert!(anonymous.iter().all(|c| !c.is_member));

    store.reset_calls();
    let alice = service
        .enrich_communities(communities, Some(&UserId::new("alice")))
        .await
        .unwrap();
    assert_eq!(store.calls(), 2);
    assert_eq!(
        alice.iter().map(|c| c.is_member).collect::<Vec<_>>(),
        vec![true, false, false]
    );
}

#[tokio::test]
async fn test_one_failing_relation_fails_the_community_batch() {
    for failing in [Lookup::MemberCounts, Lookup::MemberJoined] {
        let (store, ctx) = InMemoryStore::new()
            .with_member("c1", "alice")
            .into_context();
        store.fail_lookup(failing);
        let service = EnrichmentService::new(&ctx);

        let result = service
            .enrich_communities(
                vec![community("c1", "Runners"), community("c2", "Readers")],
                Some(&UserId::new("alice")),
            )
            .await;

        match result {
            Err(ServiceError::LoadFailed { resource, .. }) => assert_eq!(resource, "communities"),
            other => panic!("{failing:?} failing should fail the batch, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_member_lookup_failure_ignored_without_actor() {
    let (store, ctx) = InMemoryStore::new()
        .with_member("c1", "bob")
        .into_context();
    store.fail_lookup(Lookup::MemberJoined);
    let service = EnrichmentService::new(&ctx);

    let enriched = service
        .enrich_communities(vec![community("c1", "Runners")], None)
        .await
        .unwrap();

    assert_eq!(enriched[0].member_count, 1);
    assert!(!enriched[0].is_member);
}

// ============================================================================
// Discovery
// ============================================================================

/// Tech fan with no location or plan; see the scorer tables for the points
fn matching_store() -> InMemoryStore {
    let mut free = micro_meet("free-tech", "Tech");
    free.price = Some(0.0);

    let mut small = micro_meet("small-tech", "Tech");
    small.max_spots = Some(6);

    InMemoryStore::new()
        .with_profile(profile("alice", &["Tech", "AI"]))
        .with_event(small)
        .with_event(micro_meet("pottery", "Pottery"))
        .with_event(event("regular-tech", "Tech"))
        .with_event(free)
}

#[tokio::test]
async fn test_matched_micro_meets_are_ranked_and_filtered() {
    let (_store, ctx) = matching_store().into_context();
    let service = DiscoveryService::with_scorer(&ctx, scorer());

    let matches = service
        .matched_micro_meets(&UserId::new("alice"))
        .await
        .unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["free-tech", "small-tech"]);

    let scores: Vec<u8> = matches
        .iter()
        .map(|m| m.compatibility.as_ref().unwrap().match_score)
        .collect();
    assert_eq!(scores, vec![40, 38]);
    assert!(scores.iter().all(|s| *s >= MIN_MATCH_SCORE));
}

#[tokio::test]
async fn test_matched_micro_meets_requires_profile() {
    let (_store, ctx) = matching_store().into_context();
    let service = DiscoveryService::with_scorer(&ctx, scorer());

    let err = service
        .matched_micro_meets(&UserId::new("nobody"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Domain(DomainError::ProfileNotFound(_))));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_matched_micro_meets_scores_every_candidate() {
    // 100 weak matches come first in store order; the only strong one is last.
    let weak = (0..100).map(|i| micro_meet(&format!("pottery-{i}"), "Pottery"));
    let mut strong = micro_meet("free-tech", "Tech");
    strong.price = Some(0.0);

    let (_store, ctx) = InMemoryStore::new()
        .with_profile(profile("alice", &["Tech", "AI"]))
        .with_events(weak)
        .with_event(strong)
        .into_context();
    let service = DiscoveryService::with_scorer(&ctx, scorer());

    let matches = service
        .matched_micro_meets(&UserId::new("alice"))
        .await
        .unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["free-tech"]);
}

#[tokio::test]
async fn test_list_events_scores_only_micro_meets() {
    let (_store, ctx) = matching_store().into_context();
    let service = DiscoveryService::with_scorer(&ctx, scorer());

    let query = EventQuery {
        limit: 50,
        ..Default::default()
    };
    let listed = service
        .list_events(query, Some(&UserId::new("alice")))
        .await
        .unwrap();

    assert_eq!(listed.len(), 4);
    for item in &listed {
        assert_eq!(item.compatibility.is_some(), item.is_micro_meet, "{}", item.id);
    }
}

#[tokio::test]
async fn test_feed_pages_with_cursor() {
    let (_store, ctx) = InMemoryStore::new()
        .with_post(post("p1", "bob", 1))
        .with_post(post("p2", "bob", 2))
        .with_post(post("p3", "bob", 3))
        .into_context();
    let service = DiscoveryService::new(&ctx);

    let first = service
        .feed(
            PostQuery {
                limit: 2,
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert!(first.has_more);
    assert_eq!(first.next_before.as_deref(), Some("p2"));

    let second = service
        .feed(
            PostQuery {
                before: first.next_before.map(gather_core::PostId::new),
                limit: 2,
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert!(!second.has_more);
    assert_eq!(second.next_before, None);
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].id, "p3");
}
