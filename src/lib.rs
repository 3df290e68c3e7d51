//! # docrepo
//!
//! Generic, asynchronous data access over one document collection per
//! entity type.
//!
//! The workspace splits into a backend-independent contract
//! (`docrepo-core`) and a MongoDB-backed implementation (`docrepo-mongodb`,
//! behind the `mongodb` feature). This crate re-exports both so host
//! applications can depend on a single name and enable the backends they
//! need.
//!
//! ## Quick start
//!
//! ```
//! use docrepo::{Entity, InMemoryRepository, Repository};
//! use serde::{Deserialize, Serialize};
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Medicine {
//!     // Document stores keep the identifier under `_id`.
//!     #[serde(rename = "_id")]
//!     id: Uuid,
//!     name: String,
//! }
//!
//! impl Entity for Medicine {
//!     fn id(&self) -> Uuid {
//!         self.id
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> docrepo::Result<()> {
//! let repository = InMemoryRepository::new();
//! let aspirin = Medicine {
//!     id: Uuid::new_v4(),
//!     name: "Aspirin".to_string(),
//! };
//!
//! repository.insert(&aspirin).await?;
//! assert_eq!(repository.find_by_id(aspirin.id).await?, Some(aspirin));
//! # Ok(())
//! # }
//! ```
//!
//! Swapping the in-memory repository for `MongoRepository` changes the
//! filter type (a native `bson` query document instead of a closure) and
//! nothing else.

pub use docrepo_core::{Entity, InMemoryRepository, Predicate, Repository, RepositoryError, Result};

/// MongoDB backend (requires the `mongodb` cargo feature).
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use docrepo_mongodb::{connect, MongoRepository, MongoSettings};
}
