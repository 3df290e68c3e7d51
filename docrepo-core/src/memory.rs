//! In-memory repository backend
//!
//! A HashMap behind a non-blocking `RwLock`, implementing the same
//! contract as the real backends. Useful as a test double and as a
//! development stand-in when no database is reachable.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    entity::Entity,
    error::{RepositoryError, Result},
    repository::Repository,
};

/// Filter type of the in-memory backend: a plain predicate over records.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Repository keeping its records in process memory.
///
/// Cloning is cheap and every clone shares the same underlying map, so a
/// repository can be handed to several tasks at once.
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T> InMemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    type Filter = Predicate<T>;

    async fn insert(&self, entity: &T) -> Result<()> {
        let id = entity.id();
        if id.is_nil() {
            return Err(RepositoryError::InvalidArgument(
                "entity has no identifier".to_string(),
            ));
        }
        self.records.write().await.insert(id, entity.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_many(&self, filter: Self::Filter) -> Result<Vec<T>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|entity| filter(entity))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_one(&self, filter: Self::Filter) -> Result<Option<T>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|entity| filter(entity))
            .cloned())
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let id = entity.id();
        if id.is_nil() {
            return Err(RepositoryError::InvalidArgument(
                "entity has no identifier".to_string(),
            ));
        }
        let mut records = self.records.write().await;
        // Replace only an existing record; update never inserts.
        if records.contains_key(&id) {
            records.insert(id, entity.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.records.write().await.remove(&id);
        Ok(())
    }

    async fn delete_many(&self, filter: Self::Filter) -> Result<()> {
        self.records
            .write()
            .await
            .retain(|_, entity| !filter(entity));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Medicine {
        #[serde(rename = "_id")]
        id: Uuid,
        name: String,
        dosage_mg: u32,
    }

    impl Entity for Medicine {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn medicine(name: &str, dosage_mg: u32) -> Medicine {
        Medicine {
            id: Uuid::new_v4(),
            name: name.to_string(),
            dosage_mg,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id_returns_equal_record() {
        let repository = InMemoryRepository::new();
        let aspirin = medicine("Aspirin", 500);

        repository.insert(&aspirin).await.unwrap();

        let found = repository.find_by_id(aspirin.id).await.unwrap();
        assert_eq!(found, Some(aspirin));
    }

    #[tokio::test]
    async fn find_by_id_unknown_returns_none() {
        let repository: InMemoryRepository<Medicine> = InMemoryRepository::new();

        let found = repository.find_by_id(Uuid::new_v4()).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn insert_rejects_nil_identifier() {
        let repository = InMemoryRepository::new();
        let blank = Medicine {
            id: Uuid::nil(),
            name: "Blank".to_string(),
            dosage_mg: 0,
        };

        let err = repository.insert(&blank).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidArgument(_)));

        let all = repository.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn update_rejects_nil_identifier() {
        let repository = InMemoryRepository::new();
        let blank = Medicine {
            id: Uuid::nil(),
            name: "Blank".to_string(),
            dosage_mg: 0,
        };

        let err = repository.update(&blank).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn find_all_on_empty_collection_returns_empty_vec() {
        let repository: InMemoryRepository<Medicine> = InMemoryRepository::new();

        let all = repository.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn find_many_returns_matching_subset() {
        let repository = InMemoryRepository::new();
        let aspirin = medicine("Aspirin", 500);
        let ibuprofen = medicine("Ibuprofen", 400);
        let paracetamol = medicine("Paracetamol", 250);
        repository.insert(&aspirin).await.unwrap();
        repository.insert(&ibuprofen).await.unwrap();
        repository.insert(&paracetamol).await.unwrap();

        let strong = repository
            .find_many(Box::new(|m: &Medicine| m.dosage_mg >= 400))
            .await
            .unwrap();

        assert_eq!(strong.len(), 2);
        assert!(strong.contains(&aspirin));
        assert!(strong.contains(&ibuprofen));
    }

    #[tokio::test]
    async fn find_one_returns_a_match() {
        let repository = InMemoryRepository::new();
        let aspirin = medicine("Aspirin", 500);
        repository.insert(&aspirin).await.unwrap();

        let found = repository
            .find_one(Box::new(|m: &Medicine| m.name == "Aspirin"))
            .await
            .unwrap();
        assert_eq!(found, Some(aspirin));
    }

    #[tokio::test]
    async fn find_one_without_match_returns_none() {
        let repository = InMemoryRepository::new();
        repository.insert(&medicine("Aspirin", 500)).await.unwrap();

        let found = repository
            .find_one(Box::new(|m: &Medicine| m.name == "Morphine"))
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let repository = InMemoryRepository::new();
        let mut aspirin = medicine("Aspirin", 500);
        repository.insert(&aspirin).await.unwrap();

        aspirin.name = "Aspirin Forte".to_string();
        aspirin.dosage_mg = 800;
        repository.update(&aspirin).await.unwrap();

        let found = repository.find_by_id(aspirin.id).await.unwrap();
        assert_eq!(found, Some(aspirin));
    }

    #[tokio::test]
    async fn update_unknown_record_is_a_noop() {
        let repository = InMemoryRepository::new();
        let phantom = medicine("Phantom", 100);

        repository.update(&phantom).await.unwrap();

        let all = repository.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repository = InMemoryRepository::new();
        let aspirin = medicine("Aspirin", 500);
        repository.insert(&aspirin).await.unwrap();

        repository.delete(aspirin.id).await.unwrap();
        repository.delete(aspirin.id).await.unwrap();

        let found = repository.find_by_id(aspirin.id).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn delete_many_removes_matches_only() {
        let repository = InMemoryRepository::new();
        let a = medicine("A", 100);
        let b = medicine("B", 200);
        let c = medicine("C", 300);
        repository.insert(&a).await.unwrap();
        repository.insert(&b).await.unwrap();
        repository.insert(&c).await.unwrap();

        repository
            .delete_many(Box::new(|m: &Medicine| m.name == "B" || m.name == "C"))
            .await
            .unwrap();

        let remaining = repository.find_all().await.unwrap();
        assert_eq!(remaining, vec![a]);
    }

    #[tokio::test]
    async fn delete_many_without_matches_is_a_noop() {
        let repository = InMemoryRepository::new();
        let aspirin = medicine("Aspirin", 500);
        repository.insert(&aspirin).await.unwrap();

        repository
            .delete_many(Box::new(|m: &Medicine| m.dosage_mg > 10_000))
            .await
            .unwrap();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let repository = InMemoryRepository::new();
        let shared = repository.clone();
        let aspirin = medicine("Aspirin", 500);

        repository.insert(&aspirin).await.unwrap();

        let found = shared.find_by_id(aspirin.id).await.unwrap();
        assert_eq!(found, Some(aspirin));
    }

    #[tokio::test]
    async fn concurrent_inserts_all_land() {
        let repository = InMemoryRepository::new();

        let mut handles = Vec::new();
        for i in 0..5u32 {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move {
                repository
                    .insert(&medicine(&format!("Medicine {i}"), 100 * (i + 1)))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 5);
    }
}
