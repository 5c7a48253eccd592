//! Movies Info HTTP Handlers
//!
//! Parses inbound requests, invokes the orchestration service, and maps
//! results, absences, and errors onto transport-level status codes.
//! List and filter responses stream the JSON array chunk by chunk from the
//! repository scan, so the full result set is never buffered here.

use axum::body::{Body, Bytes};
use axum::extract::{Extension, Path, Query};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use futures::stream::{self, StreamExt};
use serde::Deserialize;
use std::sync::Arc;

use super::error::MoviesInfoError;
use super::service::{MovieInfoDtoStream, MoviesInfoService};
use super::types::MovieInfoDto;

pub const MSG_YEAR_PARAM_REQUIRED: &str = "year query parameter is required";

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

/// Assembles the route table for the CRUD surface. The service is injected
/// into every handler through an `Extension` layer.
pub fn router(service: Arc<MoviesInfoService>) -> Router {
    Router::new()
        .route("/moviesInfo/add", post(handle_add_movie_info))
        .route("/moviesInfo/get/:movie_id", get(handle_get_movie_info))
        .route("/moviesInfo/get", get(handle_get_movies_info_by_year))
        .route(
            "/moviesInfo/getAllMoviesInfo",
            get(handle_get_all_movies_info),
        )
        .route("/moviesInfo/update/:movie_id", put(handle_update_movie_info))
        .route(
            "/moviesInfo/delete/:movie_id",
            delete(handle_delete_movie_info),
        )
        .route("/moviesInfo/deleteAll", delete(handle_delete_all_movies_info))
        .layer(Extension(service))
}

pub async fn handle_add_movie_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
    Json(dto): Json<MovieInfoDto>,
) -> Result<(StatusCode, Json<MovieInfoDto>), MoviesInfoError> {
    let saved = service.add_movie_info(dto).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn handle_get_movie_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
    Path(movie_id): Path<String>,
) -> Result<Response, MoviesInfoError> {
    match service.get_movie_by_id(&movie_id).await? {
        Some(dto) => Ok((StatusCode::OK, Json(dto)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn handle_get_all_movies_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
) -> Result<Response, MoviesInfoError> {
    let views = service.get_all_movies().await?;
    Ok(streamed_json_array(views))
}

pub async fn handle_get_movies_info_by_year(
    Extension(service): Extension<Arc<MoviesInfoService>>,
    Query(query): Query<YearQuery>,
) -> Result<Response, MoviesInfoError> {
    let year = match query.year {
        None => {
            return Err(MoviesInfoError::Validation(vec![
                MSG_YEAR_PARAM_REQUIRED.to_string(),
            ]));
        }
        Some(year) if year <= 0 => {
            return Err(MoviesInfoError::Validation(vec![
                super::types::MSG_YEAR_POSITIVE.to_string(),
            ]));
        }
        Some(year) => year,
    };

    let views = service.get_movies_by_year(year).await?;
    Ok(streamed_json_array(views))
}

pub async fn handle_update_movie_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
    Path(movie_id): Path<String>,
    Json(dto): Json<MovieInfoDto>,
) -> Result<Response, MoviesInfoError> {
    match service.update_movie_by_id(&movie_id, dto).await? {
        Some(updated) => Ok((StatusCode::ACCEPTED, Json(updated)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn handle_delete_movie_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
    Path(movie_id): Path<String>,
) -> Result<StatusCode, MoviesInfoError> {
    service.delete_movie_by_id(&movie_id).await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn handle_delete_all_movies_info(
    Extension(service): Extension<Arc<MoviesInfoService>>,
) -> Result<StatusCode, MoviesInfoError> {
    service.delete_all_movies().await?;
    Ok(StatusCode::ACCEPTED)
}

/// Wraps a view stream in a chunked JSON array body: an opening bracket,
/// one serialized view per chunk with comma separators, a closing bracket.
/// Elements flow to the client as the scan yields them; an empty stream
/// produces `[]`.
///
/// A storage failure mid-scan can only abort the body, since the 200 status
/// line has already been sent.
fn streamed_json_array(views: MovieInfoDtoStream) -> Response {
    let chunks = stream::once(async { Ok::<Bytes, axum::Error>(Bytes::from_static(b"[")) })
        .chain(views.enumerate().map(|(index, item)| {
            let view = item.map_err(axum::Error::new)?;
            let mut chunk = if index == 0 { Vec::new() } else { vec![b','] };
            serde_json::to_writer(&mut chunk, &view).map_err(axum::Error::new)?;
            Ok(Bytes::from(chunk))
        }))
        .chain(stream::once(async {
            Ok::<Bytes, axum::Error>(Bytes::from_static(b"]"))
        }));

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(chunks),
    )
        .into_response()
}
