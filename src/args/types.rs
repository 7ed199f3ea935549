use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::controller::cache::DEFAULT_TTL_MINUTES;
use crate::error::AppError;
use crate::source::client::{DEFAULT_LEADERBOARD_URL, DEFAULT_TOURNAMENT_URL};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sqlite filename for bet entries. `:memory:` keeps them in memory.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME", default_value = "bets.db")]
    pub db_name: String,
    #[arg(
        short = 'b',
        long,
        value_name = "BIND_ADDR",
        default_value = "0.0.0.0:8081",
        value_parser = crate::args::validation::check_bind_addr
    )]
    pub bind: SocketAddr,
    /// How long the upcoming-players list is served before refetching.
    #[arg(
        long,
        value_name = "MINUTES",
        default_value_t = DEFAULT_TTL_MINUTES,
        value_parser = crate::args::validation::check_positive
    )]
    pub cache_ttl_minutes: i64,
    /// Per-request timeout for pgatour.com.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 20,
        value_parser = crate::args::validation::check_positive
    )]
    pub fetch_timeout_secs: i64,
    #[arg(long, value_name = "URL", default_value = DEFAULT_LEADERBOARD_URL, value_parser = crate::args::validation::check_http_url)]
    pub leaderboard_url: String,
    /// Tournament page listing the players in the upcoming field.
    #[arg(long, value_name = "URL", default_value = DEFAULT_TOURNAMENT_URL, value_parser = crate::args::validation::check_http_url)]
    pub tournament_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_name: String,
    pub bind: SocketAddr,
    pub cache_ttl: chrono::Duration,
    pub fetch_timeout: Duration,
    pub leaderboard_url: String,
    pub tournament_url: String,
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a duration is out of range
    pub fn into_config(self) -> Result<AppConfig, AppError> {
        let cache_ttl = chrono::Duration::try_minutes(self.cache_ttl_minutes).ok_or_else(|| {
            AppError::Config(format!(
                "cache ttl of {} minutes is out of range",
                self.cache_ttl_minutes
            ))
        })?;
        let fetch_timeout = u64::try_from(self.fetch_timeout_secs)
            .map(Duration::from_secs)
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(AppConfig {
            db_name: self.db_name,
            bind: self.bind,
            cache_ttl,
            fetch_timeout,
            leaderboard_url: self.leaderboard_url,
            tournament_url: self.tournament_url,
        })
    }
}
