//! The capability bound for stored record types

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A uniquely identifiable record that can be persisted through a
/// [`Repository`](crate::Repository).
///
/// Identifiers are caller-assigned v4 UUIDs; the store never generates
/// them. The nil UUID stands for an absent record and is rejected by the
/// write operations, so implementors should assign a real identifier
/// before handing an entity to a repository.
///
/// Document-store backends keep the identifier under the `_id` field, so
/// the identifier field should carry `#[serde(rename = "_id")]`.
///
/// # Examples
///
/// ```
/// use docrepo_core::Entity;
/// use serde::{Deserialize, Serialize};
/// use uuid::Uuid;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Medicine {
///     #[serde(rename = "_id")]
///     id: Uuid,
///     name: String,
/// }
///
/// impl Entity for Medicine {
///     fn id(&self) -> Uuid {
///         self.id
///     }
/// }
/// ```
pub trait Entity:
    Clone + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static
{
    /// The unique identifier of this record.
    fn id(&self) -> Uuid;
}
