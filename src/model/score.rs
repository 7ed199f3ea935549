use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreDetail {
    pub player: String,
    pub rank: String,
    pub today: String,
    pub total_score: String,
    pub round_scores: Vec<String>,
    pub points: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BetResult {
    pub owner: String,
    pub total_points: i32,
    pub details: Vec<ScoreDetail>,
    /// Lowest numeric rank among the details, ignoring CUT/WD and dashes.
    pub best_position: Option<u32>,
}
