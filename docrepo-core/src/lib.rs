//! # Entity Repository Contract
//!
//! Backend-independent building blocks for typed data access:
//!
//! - [`Entity`] - the capability bound every stored record type implements
//! - [`Repository`] - the async operation set over one collection of entities
//! - [`RepositoryError`] / [`Result`] - the error taxonomy shared by all
//!   backends
//! - [`InMemoryRepository`] - a HashMap-backed implementation used in tests
//!   and as a development stand-in
//!
//! Backends implement [`Repository`] with their own native `Filter` type;
//! everything else about the contract is fixed here.

pub mod entity;
pub mod error;
pub mod memory;
pub mod repository;

pub use entity::Entity;
pub use error::{RepositoryError, Result};
pub use memory::{InMemoryRepository, Predicate};
pub use repository::Repository;
