pub mod bet;
pub mod directory;
pub mod leaderboard;
pub mod score;

pub use bet::*;
pub use directory::*;
pub use leaderboard::*;
pub use score::*;
