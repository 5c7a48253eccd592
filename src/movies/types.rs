//! Movie Info Data Types
//!
//! Defines the persisted entity, the wire-facing DTO, and the conversions
//! between them. The DTO carries the release date as ISO-8601 text and is
//! only loosely validated; the entity is the strongly typed form handed to
//! the repository.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_NAME_REQUIRED: &str = "MoviesInfo.name cannot be null/empty";
pub const MSG_YEAR_REQUIRED: &str = "MoviesInfo.year cannot be null/empty";
pub const MSG_YEAR_POSITIVE: &str = "MoviesInfo.year must be a positive value";
pub const MSG_CAST_REQUIRED: &str = "MoviesInfo.cast cannot be null/empty";
pub const MSG_RELEASE_DATE_REQUIRED: &str = "MoviesInfo.releaseDate cannot be null/empty";
pub const MSG_RELEASE_DATE_INVALID: &str =
    "MoviesInfo.releaseDate must be a valid date (yyyy-MM-dd)";

/// Derives the primary key for a movie record from its name and year,
/// e.g. `("Inception", 2010)` -> `"Inception-2010"`.
///
/// Pure function, no I/O. The same derivation is used for the candidate id
/// of an incoming create request and for duplicate checks, so two records
/// with the same (name, year) always map to the same key.
pub fn derive_movie_info_id(name: &str, year: i32) -> String {
    format!("{}-{}", name, year)
}

/// The persisted representation of a movie record.
///
/// `movie_info_id` is globally unique; for records created through the add
/// path it always equals `derive_movie_info_id(name, year)` and never
/// changes afterwards, updates included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub movie_info_id: String,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

/// The wire representation of a movie record.
///
/// All fields are optional on the way in so that validation can report every
/// missing value at once instead of failing at deserialization. The release
/// date travels as a date-formatted string; re-parsing it happens during
/// conversion to the entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfoDto {
    #[serde(default)]
    pub movie_info_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Failure to convert the wire representation into an entity.
///
/// These are client errors, never storage errors: a malformed request body
/// must be rejected before any repository call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{MSG_NAME_REQUIRED}")]
    MissingName,
    #[error("{MSG_YEAR_REQUIRED}")]
    MissingYear,
    #[error("{MSG_RELEASE_DATE_REQUIRED}")]
    MissingReleaseDate,
    #[error("{MSG_RELEASE_DATE_INVALID}")]
    InvalidReleaseDate,
}

impl MovieInfoDto {
    /// Checks the request-level constraints: name non-blank, year present
    /// and positive, every cast entry non-blank, release date present.
    ///
    /// Returns the full list of violations, sorted alphabetically, so the
    /// client sees every problem in one round trip. Date format correctness
    /// is deferred to [`MovieInfoDto::to_entity`].
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            errors.push(MSG_NAME_REQUIRED.to_string());
        }
        match self.year {
            None => errors.push(MSG_YEAR_REQUIRED.to_string()),
            Some(year) if year <= 0 => errors.push(MSG_YEAR_POSITIVE.to_string()),
            Some(_) => {}
        }
        if self.cast.iter().any(|member| member.trim().is_empty()) {
            errors.push(MSG_CAST_REQUIRED.to_string());
        }
        if self
            .release_date
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
        {
            errors.push(MSG_RELEASE_DATE_REQUIRED.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort();
            Err(errors)
        }
    }

    /// Parses the release date text into a calendar date.
    pub fn parsed_release_date(&self) -> Result<NaiveDate, MappingError> {
        let text = self
            .release_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or(MappingError::MissingReleaseDate)?;
        text.trim()
            .parse()
            .map_err(|_| MappingError::InvalidReleaseDate)
    }

    /// Converts the wire representation into a persistable entity.
    ///
    /// The id is always recomputed from (name, year); a client-supplied
    /// `movieInfoId` is never trusted for creation.
    pub fn to_entity(&self) -> Result<MovieInfo, MappingError> {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(MappingError::MissingName)?;
        let year = self.year.ok_or(MappingError::MissingYear)?;
        let release_date = self.parsed_release_date()?;

        Ok(MovieInfo {
            movie_info_id: derive_movie_info_id(name, year),
            name: name.to_string(),
            year,
            cast: self.cast.clone(),
            release_date,
        })
    }
}

impl From<MovieInfo> for MovieInfoDto {
    /// Converts a persisted entity back to its wire form. A persisted date
    /// is always valid, so this direction cannot fail.
    fn from(movie: MovieInfo) -> Self {
        Self {
            movie_info_id: Some(movie.movie_info_id),
            name: Some(movie.name),
            year: Some(movie.year),
            cast: movie.cast,
            release_date: Some(movie.release_date.to_string()),
        }
    }
}
