// Copyright 2025 Cowboy AI, LLC.

//! Entity identity and the aggregate root contract

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// IDs are globally unique. The phantom type parameter keeps IDs of
/// different aggregates from being mixed up at compile time.
///
/// # Examples
///
/// ```rust
/// use catalog_domain::{CategoryId, EntityId};
///
/// let id = CategoryId::new();
/// assert!(!id.as_uuid().is_nil());
///
/// let same = EntityId::from_uuid(*id.as_uuid());
/// assert_eq!(id, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId<T> {
    id: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

/// Marker trait for aggregate roots
///
/// Aggregate roots own their invariants and are the only unit handed to
/// repositories.
pub trait AggregateRoot: Send + Sync {
    /// The type of ID for this aggregate
    type Id: Copy + Eq + fmt::Display + Send + Sync;

    /// Get the aggregate's ID
    fn id(&self) -> Self::Id;
}

/// Marker for category aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryMarker;
