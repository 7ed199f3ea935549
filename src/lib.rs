pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod registry;
pub mod score;
pub mod source;
pub mod view;

pub use controller::cache::UpcomingPlayersCache;
pub use controller::data_service::PicksService;
pub use score::{rank_points, score_all, score_entry};
