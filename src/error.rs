use crate::registry::RegistryError;
use crate::source::SourceError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The leaderboard could not be fetched, so nothing can be scored.
    #[error("leaderboard unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Registry(e) => match e {
                RegistryError::OwnerMissing | RegistryError::WrongPlayerCount { .. } => {
                    StatusCode::BAD_REQUEST
                }
                RegistryError::OwnerExists(_) => StatusCode::CONFLICT,
                RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
                RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
