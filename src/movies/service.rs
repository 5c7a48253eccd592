//! Movies Info Orchestration Service
//!
//! The only place business rules live. Each operation sequences
//! existence-check -> conflict decision -> persist/modify -> remap, with
//! every storage call awaited, so no worker thread ever blocks on I/O.
//! The service decides *when* a write is allowed but never mutates state
//! itself; persistence is always delegated to the repository.

use futures::stream::{BoxStream, StreamExt};
use std::sync::Arc;

use super::error::MoviesInfoError;
use super::repository::{MovieInfoRepository, RepositoryError};
use super::types::MovieInfoDto;

/// Lazy one-shot sequence of views, produced as the underlying scan yields
/// records. Consumable exactly once; dropping it terminates the scan.
pub type MovieInfoDtoStream = BoxStream<'static, Result<MovieInfoDto, RepositoryError>>;

pub struct MoviesInfoService {
    repository: Arc<dyn MovieInfoRepository>,
}

impl MoviesInfoService {
    pub fn new(repository: Arc<dyn MovieInfoRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new record under its derived id.
    ///
    /// Validation and date parsing run before any storage call. The
    /// existence check is a fast path only; the create-only insert is the
    /// authoritative duplicate guard, so two concurrent adds for the same
    /// derived id store exactly one record.
    pub async fn add_movie_info(
        &self,
        dto: MovieInfoDto,
    ) -> Result<MovieInfoDto, MoviesInfoError> {
        dto.validate().map_err(MoviesInfoError::Validation)?;
        let movie = dto.to_entity()?;

        if self.repository.exists_by_id(&movie.movie_info_id).await? {
            return Err(MoviesInfoError::DuplicateMovieInfo(movie.movie_info_id));
        }

        let saved = match self.repository.insert(movie).await {
            Ok(saved) => saved,
            Err(RepositoryError::DuplicateId(movie_info_id)) => {
                return Err(MoviesInfoError::DuplicateMovieInfo(movie_info_id));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Added movie info {}", saved.movie_info_id);
        Ok(saved.into())
    }

    /// Point lookup. `Ok(None)` is absence, not an error.
    pub async fn get_movie_by_id(
        &self,
        movie_info_id: &str,
    ) -> Result<Option<MovieInfoDto>, MoviesInfoError> {
        let movie = self.repository.find_by_id(movie_info_id).await?;
        Ok(movie.map(MovieInfoDto::from))
    }

    pub async fn get_all_movies(&self) -> Result<MovieInfoDtoStream, MoviesInfoError> {
        let movies = self.repository.find_all().await?;
        Ok(movies.map(|result| result.map(MovieInfoDto::from)).boxed())
    }

    /// Filtered scan by exact year match. Year positivity is checked at the
    /// handler before this is called.
    pub async fn get_movies_by_year(
        &self,
        year: i32,
    ) -> Result<MovieInfoDtoStream, MoviesInfoError> {
        let movies = self.repository.find_by_year(year).await?;
        Ok(movies.map(|result| result.map(MovieInfoDto::from)).boxed())
    }

    /// Replaces every mutable field of an existing record with whatever the
    /// caller supplied; the id is taken from the path and never changes.
    /// Partial updates are not supported.
    pub async fn update_movie_by_id(
        &self,
        movie_info_id: &str,
        dto: MovieInfoDto,
    ) -> Result<Option<MovieInfoDto>, MoviesInfoError> {
        let Some(mut existing) = self.repository.find_by_id(movie_info_id).await? else {
            return Ok(None);
        };

        let release_date = dto.parsed_release_date()?;
        existing.name = dto.name.unwrap_or_default();
        existing.year = dto.year.unwrap_or_default();
        existing.cast = dto.cast;
        existing.release_date = release_date;

        let saved = self.repository.save(existing).await?;
        tracing::info!("Updated movie info {}", saved.movie_info_id);
        Ok(Some(saved.into()))
    }

    /// Unconditional delete; an absent id still succeeds.
    pub async fn delete_movie_by_id(
        &self,
        movie_info_id: &str,
    ) -> Result<(), MoviesInfoError> {
        self.repository.delete_by_id(movie_info_id).await?;
        Ok(())
    }

    pub async fn delete_all_movies(&self) -> Result<(), MoviesInfoError> {
        self.repository.delete_all().await?;
        tracing::info!("Deleted all movie infos");
        Ok(())
    }
}
