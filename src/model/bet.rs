use serde::{Deserialize, Serialize};

pub const PLAYERS_PER_ENTRY: usize = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BetEntry {
    pub owner: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
}
