pub mod types;
pub mod validation;

pub use types::{AppConfig, Args};

use clap::Parser;

/// # Errors
///
/// Will return `Err` if the parsed arguments do not form a usable config
pub fn args_checks() -> Result<AppConfig, crate::error::AppError> {
    Args::parse().into_config()
}
