//! # MongoDB Repository Backend
//!
//! Implements the `docrepo-core` contract over a MongoDB collection:
//!
//! - [`MongoRepository`] - one repository per entity/collection pair, each
//!   operation a single driver call
//! - [`MongoSettings`] / [`connect`] - deployment configuration and client
//!   bootstrap
//!
//! Filters are native [`bson::Document`](mongodb::bson::Document) queries
//! handed to the driver verbatim. Transactions, retries, pooling tuning and
//! index management stay with the driver and the deployment.

pub mod repository;
pub mod settings;

pub use repository::MongoRepository;
pub use settings::{connect, MongoSettings};
