//! Error Translation
//!
//! Maps validation failures and domain conflicts onto structured,
//! client-facing payloads. Absence is not represented here at all: a lookup
//! that found nothing is a successful `None`, translated to 404 directly by
//! the handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::repository::RepositoryError;
use super::types::MappingError;

pub const DUPLICATE_MOVIE_INFO_MSG: &str = "MovieInfo Already Exists in Db";

/// Client-facing error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: String,
    pub reason: String,
    pub error_msgs: Vec<String>,
}

#[derive(Debug, Error)]
pub enum MoviesInfoError {
    /// One or more request fields failed validation. The messages arrive
    /// pre-sorted from the DTO and are surfaced verbatim.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    /// A record with the same derived id already exists. A client-correctable
    /// conflict, not a server fault.
    #[error("{DUPLICATE_MOVIE_INFO_MSG}")]
    DuplicateMovieInfo(String),
    /// The store could not serve the request. Never swallowed, never retried.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<MappingError> for MoviesInfoError {
    fn from(err: MappingError) -> Self {
        MoviesInfoError::Validation(vec![err.to_string()])
    }
}

impl IntoResponse for MoviesInfoError {
    fn into_response(self) -> Response {
        let (status, error_msgs) = match self {
            MoviesInfoError::Validation(msgs) => (StatusCode::BAD_REQUEST, msgs),
            MoviesInfoError::DuplicateMovieInfo(movie_info_id) => {
                tracing::debug!("Rejected duplicate movie info: {}", movie_info_id);
                (
                    StatusCode::BAD_REQUEST,
                    vec![DUPLICATE_MOVIE_INFO_MSG.to_string()],
                )
            }
            MoviesInfoError::Storage(err) => {
                tracing::error!("Storage failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![err.to_string()])
            }
        };

        let reason = status
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();
        let body = ErrorResponse {
            status_code: status.as_u16().to_string(),
            reason,
            error_msgs,
        };

        (status, Json(body)).into_response()
    }
}
