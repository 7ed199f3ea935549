use crate::model::{BetResult, ScoreDetail};

/// Byte-wise order on the raw rank token, ties broken by player name.
///
/// This is string order, not numeric order: "10" < "2" < "CUT" < "T5".
pub fn sort_details_by_raw_rank(details: &mut [ScoreDetail]) {
    details.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.player.cmp(&b.player)));
}

pub fn sort_standings(results: &mut [BetResult]) {
    results.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.owner.cmp(&b.owner))
    });
}
