mod common;

use chrono::{Duration, Utc};
use common::{FakeDirectory, directory};
use rusty_golf_picks::controller::cache::{CacheOutcome, UpcomingPlayersCache};
use rusty_golf_picks::source::SourceError;
use std::sync::Arc;
use tokio::task::JoinSet;

fn cache_with(source: &Arc<FakeDirectory>, ttl_minutes: i64) -> UpcomingPlayersCache {
    UpcomingPlayersCache::new(source.clone(), Duration::minutes(ttl_minutes))
}

#[tokio::test]
async fn test2_reads_within_ttl_share_one_fetch() {
    let source = Arc::new(FakeDirectory::new(vec![Ok(directory(&["A", "B"]))]));
    let cache = cache_with(&source, 120);
    let start = Utc::now();

    assert_eq!(cache.last_outcome().await, CacheOutcome::NeverFetched);
    let first = cache.get_upcoming_players_at(start).await;
    let second = cache
        .get_upcoming_players_at(start + Duration::minutes(119))
        .await;

    assert_eq!(source.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.entries.len(), 2);
    assert_eq!(cache.last_outcome().await, CacheOutcome::Fresh);
}

#[tokio::test]
async fn test2_refetches_after_ttl_and_replaces_wholesale() {
    let source = Arc::new(FakeDirectory::new(vec![
        Ok(directory(&["A", "B"])),
        Ok(directory(&["C"])),
    ]));
    let cache = cache_with(&source, 3);
    let start = Utc::now();

    let first = cache.get_upcoming_players_at(start).await;
    let at_edge = cache
        .get_upcoming_players_at(start + Duration::minutes(3))
        .await;
    assert!(Arc::ptr_eq(&first, &at_edge));

    let refreshed = cache
        .get_upcoming_players_at(start + Duration::minutes(3) + Duration::seconds(1))
        .await;
    assert_eq!(source.calls(), 2);
    let names: Vec<&str> = refreshed
        .entries
        .iter()
        .map(|e| e.player_name.as_str())
        .collect();
    assert_eq!(names, vec!["C"]);
}

#[tokio::test]
async fn test2_failure_yields_empty_and_is_not_retried_inside_ttl() {
    let source = Arc::new(FakeDirectory::new(vec![Err(SourceError::Transient(
        "timed out".to_string(),
    ))]));
    let cache = cache_with(&source, 10);
    let start = Utc::now();

    let first = cache.get_upcoming_players_at(start).await;
    assert!(first.is_empty());
    assert_eq!(
        cache.last_outcome().await,
        CacheOutcome::Failed(SourceError::Transient("timed out".to_string()))
    );

    let again = cache
        .get_upcoming_players_at(start + Duration::minutes(5))
        .await;
    assert!(again.is_empty());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test2_expired_data_is_dropped_when_refresh_fails() {
    let source = Arc::new(FakeDirectory::new(vec![
        Ok(directory(&["A"])),
        Err(SourceError::Shape("no player links".to_string())),
    ]));
    let cache = cache_with(&source, 5);
    let start = Utc::now();

    assert!(!cache.get_upcoming_players_at(start).await.is_empty());
    let expired = cache
        .get_upcoming_players_at(start + Duration::minutes(6))
        .await;
    assert!(expired.is_empty());
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test2_empty_fetch_counts_as_failure() {
    let source = Arc::new(FakeDirectory::new(vec![Ok(directory(&[]))]));
    let cache = cache_with(&source, 5);

    assert!(cache.get_upcoming_players().await.is_empty());
    assert_eq!(
        cache.last_outcome().await,
        CacheOutcome::Failed(SourceError::Empty)
    );
}

#[tokio::test]
async fn test2_force_refresh_fetches_again() {
    let source = Arc::new(FakeDirectory::new(vec![
        Ok(directory(&["A"])),
        Ok(directory(&["B"])),
    ]));
    let cache = cache_with(&source, 120);
    let start = Utc::now();

    cache.get_upcoming_players_at(start).await;
    cache.force_refresh().await;
    let after = cache.get_upcoming_players_at(start).await;

    assert_eq!(source.calls(), 2);
    assert_eq!(after.entries[0].player_name, "B");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test2_concurrent_stale_reads_fetch_once() {
    let source = Arc::new(
        FakeDirectory::new(vec![Ok(directory(&["A"]))])
            .with_delay(std::time::Duration::from_millis(50)),
    );
    let cache = Arc::new(cache_with(&source, 120));

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let cache = Arc::clone(&cache);
        tasks.spawn(async move { cache.get_upcoming_players().await });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.unwrap());
    }

    assert_eq!(source.calls(), 1);
    assert!(results.iter().all(|d| Arc::ptr_eq(d, &results[0])));
    assert_eq!(results[0].entries[0].player_name, "A");
}
