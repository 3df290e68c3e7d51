//! MongoDB-backed repository

use async_trait::async_trait;
use docrepo_core::{Entity, Repository, RepositoryError, Result};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};
use uuid::Uuid;

/// Field MongoDB keys documents on. Entities serialize their identifier
/// under this name via `#[serde(rename = "_id")]`.
const ID_FIELD: &str = "_id";

/// Repository over one MongoDB collection.
///
/// Bound to a typed [`Collection`] at construction and immutable
/// afterwards. Every operation is a single driver call; failures propagate
/// as [`RepositoryError::Storage`] without retry or inspection.
///
/// Cloning is cheap: the underlying collection handle shares the driver's
/// connection pool.
#[derive(Clone)]
pub struct MongoRepository<T: Send + Sync> {
    collection: Collection<T>,
}

impl<T: Entity> MongoRepository<T> {
    /// Bind a repository to `collection_name` inside `database`.
    ///
    /// No request is issued here; MongoDB creates the collection lazily on
    /// first write.
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection::<T>(collection_name),
        }
    }

    /// Identifier filter matching the stored `_id` representation.
    ///
    /// UUIDs serialize as hyphenated strings, so the filter uses the same
    /// form.
    fn id_filter(id: Uuid) -> Document {
        doc! { ID_FIELD: id.to_string() }
    }

    fn require_id(entity: &T) -> Result<Uuid> {
        let id = entity.id();
        if id.is_nil() {
            return Err(RepositoryError::InvalidArgument(
                "entity has no identifier".to_string(),
            ));
        }
        Ok(id)
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    type Filter = Document;

    async fn insert(&self, entity: &T) -> Result<()> {
        Self::require_id(entity)?;
        self.collection
            .insert_one(entity)
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        self.collection
            .find(doc! {})
            .await
            .map_err(RepositoryError::storage)?
            .try_collect()
            .await
            .map_err(RepositoryError::storage)
    }

    async fn find_many(&self, filter: Self::Filter) -> Result<Vec<T>> {
        self.collection
            .find(filter)
            .await
            .map_err(RepositoryError::storage)?
            .try_collect()
            .await
            .map_err(RepositoryError::storage)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>> {
        self.collection
            .find_one(Self::id_filter(id))
            .await
            .map_err(RepositoryError::storage)
    }

    async fn find_one(&self, filter: Self::Filter) -> Result<Option<T>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(RepositoryError::storage)
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let id = Self::require_id(entity)?;
        // Full replacement without upsert: zero matches is a silent no-op.
        self.collection
            .replace_one(Self::id_filter(id), entity)
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.collection
            .delete_one(Self::id_filter(id))
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }

    async fn delete_many(&self, filter: Self::Filter) -> Result<()> {
        self.collection
            .delete_many(filter)
            .await
            .map_err(RepositoryError::storage)?;
        Ok(())
    }
}
