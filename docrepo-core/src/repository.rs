//! The repository operation set

use async_trait::async_trait;
use uuid::Uuid;

use crate::{entity::Entity, error::Result};

/// Asynchronous data access over one collection of entities.
///
/// A repository instance is bound to a single collection at construction
/// and exposes a fixed set of operations against it. Filters are expressed
/// in the backend's native query type through the [`Filter`](Self::Filter)
/// associated type, so callers pick their filter representation when they
/// pick their backend.
///
/// Missing records are never an error: point reads return `Ok(None)`,
/// collection reads return an empty `Vec`, and writes targeting a missing
/// record complete silently. Callers must not rely on `update` or the
/// delete operations to learn whether a record existed.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Backend-native query expression selecting a subset of records.
    type Filter: Send;

    /// Store a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidArgument`] when the entity's
    /// identifier is the nil UUID. Duplicate identifiers are the store's
    /// concern and surface as [`RepositoryError::Storage`].
    ///
    /// [`RepositoryError::InvalidArgument`]: crate::RepositoryError::InvalidArgument
    /// [`RepositoryError::Storage`]: crate::RepositoryError::Storage
    async fn insert(&self, entity: &T) -> Result<()>;

    /// Retrieve every record in the collection.
    ///
    /// Returns an empty `Vec` when the collection is empty. Order is
    /// backend-defined.
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Retrieve every record matching `filter`.
    ///
    /// Returns an empty `Vec` when nothing matches.
    async fn find_many(&self, filter: Self::Filter) -> Result<Vec<T>>;

    /// Retrieve the record with the given identifier, or `None`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Retrieve one record matching `filter`, or `None`.
    ///
    /// When several records match, which one is returned is
    /// backend-defined.
    async fn find_one(&self, filter: Self::Filter) -> Result<Option<T>>;

    /// Replace the stored record sharing the entity's identifier with the
    /// given state.
    ///
    /// A full-record replacement: no field-level merging. When no record
    /// carries the identifier the call is a silent no-op and never inserts.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidArgument`] when the entity's
    /// identifier is the nil UUID.
    ///
    /// [`RepositoryError::InvalidArgument`]: crate::RepositoryError::InvalidArgument
    async fn update(&self, entity: &T) -> Result<()>;

    /// Remove the record with the given identifier.
    ///
    /// Idempotent: removing an absent record is a silent no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Remove every record matching `filter`, including none.
    async fn delete_many(&self, filter: Self::Filter) -> Result<()>;
}
