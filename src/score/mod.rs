pub mod sort_utils;

use crate::model::{BetEntry, BetResult, LeaderboardSnapshot, ScoreDetail};
use sort_utils::{sort_details_by_raw_rank, sort_standings};
use tracing::debug;

const DROPPED_OUT: [&str; 2] = ["CUT", "WD"];

fn rank_digits(rank: &str) -> String {
    rank.chars().filter(char::is_ascii_digit).collect()
}

/// Points for one raw rank token.
///
/// CUT and WD cost a point. Anything else is reduced to its digits ("T5" -> 5);
/// a token with no digits at all ("-") is worth nothing.
#[must_use]
pub fn rank_points(rank: &str) -> i32 {
    if DROPPED_OUT.contains(&rank) {
        return -1;
    }

    let digits = rank_digits(rank);
    if digits.is_empty() {
        return 0;
    }

    // a digit run too long for u64 is far outside the top 30
    match digits.parse::<u64>() {
        Ok(1) => 3,
        Ok(0..=10) => 1,
        Ok(11..=30) => 0,
        _ => -1,
    }
}

/// Numeric position behind a rank token, or `None` for CUT/WD and tokens
/// without digits.
#[must_use]
pub fn rank_position(rank: &str) -> Option<u32> {
    if DROPPED_OUT.contains(&rank) {
        return None;
    }
    rank_digits(rank).parse().ok()
}

/// Scores one selection against a snapshot.
///
/// Players missing from the snapshot contribute no detail row and no points.
/// Details come back ordered by the raw rank string, so "10" lands before "2".
#[must_use]
pub fn score_entry<S: AsRef<str>>(
    owner: &str,
    selected_players: &[S],
    snapshot: &LeaderboardSnapshot,
) -> BetResult {
    let mut details: Vec<ScoreDetail> = selected_players
        .iter()
        .filter_map(|player| {
            let player = player.as_ref();
            let Some(standing) = snapshot.find(player) else {
                debug!(owner, player, "selected player not on leaderboard");
                return None;
            };
            Some(ScoreDetail {
                player: player.to_string(),
                rank: standing.rank.clone(),
                today: standing.today.clone(),
                total_score: standing.total_score.clone(),
                round_scores: standing.round_scores.clone(),
                points: rank_points(&standing.rank),
            })
        })
        .collect();

    sort_details_by_raw_rank(&mut details);

    let total_points = details.iter().map(|d| d.points).sum();
    let best_position = details.iter().filter_map(|d| rank_position(&d.rank)).min();

    BetResult {
        owner: owner.to_string(),
        total_points,
        details,
        best_position,
    }
}

/// Scores every entry and orders the standings, most points first.
#[must_use]
pub fn score_all(entries: &[BetEntry], snapshot: &LeaderboardSnapshot) -> Vec<BetResult> {
    let mut results: Vec<BetResult> = entries
        .iter()
        .map(|entry| score_entry(&entry.owner, entry.players.as_slice(), snapshot))
        .collect();
    sort_standings(&mut results);
    results
}
