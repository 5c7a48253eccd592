//! Movie Record Store Adapter
//!
//! The storage seam of the service. `MovieInfoRepository` is the async
//! interface the orchestration layer talks to; `InMemoryMovieInfoRepository`
//! is the default backend, a concurrent map keyed by the derived movie id.
//!
//! Scans hand back lazy one-shot streams so callers can start consuming
//! results before the scan completes and never have to buffer the full
//! result set.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use thiserror::Error;

use super::types::MovieInfo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A record with this id already exists. Returned only by
    /// [`MovieInfoRepository::insert`], which is create-only.
    #[error("movie info '{0}' already exists")]
    DuplicateId(String),
    /// The backing store could not serve the request. Propagated to the
    /// caller unchanged; this layer never retries.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous key-value/query interface over movie records.
///
/// Every operation may suspend on storage I/O and may fail with
/// [`RepositoryError::Unavailable`]. The store synchronizes access per key;
/// callers perform no locking of their own.
#[async_trait]
pub trait MovieInfoRepository: Send + Sync {
    async fn exists_by_id(&self, movie_info_id: &str) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, movie_info_id: &str)
        -> Result<Option<MovieInfo>, RepositoryError>;

    /// Opens a full scan. Elements are yielded lazily; the stream is
    /// one-shot and terminates early when dropped.
    async fn find_all(
        &self,
    ) -> Result<BoxStream<'static, Result<MovieInfo, RepositoryError>>, RepositoryError>;

    /// Opens a scan filtered on exact year match.
    async fn find_by_year(
        &self,
        year: i32,
    ) -> Result<BoxStream<'static, Result<MovieInfo, RepositoryError>>, RepositoryError>;

    /// Create-only write. Rejects an already-present id with
    /// [`RepositoryError::DuplicateId`]; the rejection is atomic with the
    /// write, so two racing inserts for one id store exactly one record.
    async fn insert(&self, movie: MovieInfo) -> Result<MovieInfo, RepositoryError>;

    /// Upsert. Used by update, where the record is known to exist.
    async fn save(&self, movie: MovieInfo) -> Result<MovieInfo, RepositoryError>;

    /// Removes the record if present. Deleting an absent id is a no-op,
    /// not an error.
    async fn delete_by_id(&self, movie_info_id: &str) -> Result<(), RepositoryError>;

    async fn delete_all(&self) -> Result<(), RepositoryError>;
}

/// In-memory backend over a concurrent map.
///
/// Cloneable; clones share the same underlying data, so one instance can be
/// handed to multiple owners across async tasks.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMovieInfoRepository {
    movies: Arc<DashMap<String, MovieInfo>>,
}

impl InMemoryMovieInfoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current records matching `filter`. The snapshot is
    /// taken eagerly so the returned stream does not hold map shards locked
    /// while the consumer drains it.
    fn scan(
        &self,
        filter: impl Fn(&MovieInfo) -> bool,
    ) -> BoxStream<'static, Result<MovieInfo, RepositoryError>> {
        let snapshot: Vec<MovieInfo> = self
            .movies
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }
}

#[async_trait]
impl MovieInfoRepository for InMemoryMovieInfoRepository {
    async fn exists_by_id(&self, movie_info_id: &str) -> Result<bool, RepositoryError> {
        Ok(self.movies.contains_key(movie_info_id))
    }

    async fn find_by_id(
        &self,
        movie_info_id: &str,
    ) -> Result<Option<MovieInfo>, RepositoryError> {
        Ok(self.movies.get(movie_info_id).map(|entry| entry.clone()))
    }

    async fn find_all(
        &self,
    ) -> Result<BoxStream<'static, Result<MovieInfo, RepositoryError>>, RepositoryError> {
        Ok(self.scan(|_| true))
    }

    async fn find_by_year(
        &self,
        year: i32,
    ) -> Result<BoxStream<'static, Result<MovieInfo, RepositoryError>>, RepositoryError> {
        Ok(self.scan(move |movie| movie.year == year))
    }

    async fn insert(&self, movie: MovieInfo) -> Result<MovieInfo, RepositoryError> {
        match self.movies.entry(movie.movie_info_id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateId(movie.movie_info_id)),
            Entry::Vacant(slot) => {
                slot.insert(movie.clone());
                Ok(movie)
            }
        }
    }

    async fn save(&self, movie: MovieInfo) -> Result<MovieInfo, RepositoryError> {
        self.movies.insert(movie.movie_info_id.clone(), movie.clone());
        Ok(movie)
    }

    async fn delete_by_id(&self, movie_info_id: &str) -> Result<(), RepositoryError> {
        self.movies.remove(movie_info_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.movies.clear();
        Ok(())
    }
}
