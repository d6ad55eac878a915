// Copyright 2025 Cowboy AI, LLC.

//! In-memory repository and unit of work
//!
//! Both adapters share one [`InMemoryCategoryStore`]. Inserts land in a
//! staging area and only move to the committed map when the unit of work
//! commits. Intended for tests and local wiring.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{Category, CategoryId};
use crate::errors::{CommitError, RepositoryError};
use crate::persistence::{GenericRepository, UnitOfWork};

#[derive(Debug, Default)]
struct StoreState {
    staged: Vec<Category>,
    committed: HashMap<CategoryId, Category>,
    insert_calls: usize,
    commit_calls: usize,
    fail_next_insert: Option<String>,
    fail_next_commit: Option<String>,
}

impl StoreState {
    fn contains(&self, id: &CategoryId) -> bool {
        self.committed.contains_key(id) || self.staged.iter().any(|c| c.id() == *id)
    }
}

/// Shared backing store for the in-memory adapters
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryCategoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository staging into this store
    pub fn repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            store: self.clone(),
        }
    }

    /// Unit of work committing this store's staged categories
    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            store: self.clone(),
        }
    }

    /// Make the next insert fail with the given message
    pub async fn fail_next_insert(&self, message: impl Into<String>) {
        self.state.write().await.fail_next_insert = Some(message.into());
    }

    /// Make the next commit fail with the given message
    pub async fn fail_next_commit(&self, message: impl Into<String>) {
        self.state.write().await.fail_next_commit = Some(message.into());
    }

    /// Categories inserted but not yet committed, in insertion order
    pub async fn staged(&self) -> Vec<Category> {
        self.state.read().await.staged.clone()
    }

    /// Committed categories, oldest first
    pub async fn committed(&self) -> Vec<Category> {
        let state = self.state.read().await;
        let mut categories: Vec<_> = state.committed.values().cloned().collect();
        categories.sort_by_key(|c| (c.created_at(), *c.id().as_uuid()));
        categories
    }

    /// Look up a committed category
    pub async fn get(&self, id: &CategoryId) -> Option<Category> {
        self.state.read().await.committed.get(id).cloned()
    }

    /// Number of times insert was invoked, including failed calls
    pub async fn insert_calls(&self) -> usize {
        self.state.read().await.insert_calls
    }

    /// Number of times commit was invoked, including failed calls
    pub async fn commit_calls(&self) -> usize {
        self.state.read().await.commit_calls
    }
}

/// Category repository staging into an [`InMemoryCategoryStore`]
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    store: InMemoryCategoryStore,
}

#[async_trait]
impl GenericRepository<Category> for InMemoryCategoryRepository {
    async fn insert(
        &self,
        aggregate: &Category,
        cancellation: &CancellationToken,
    ) -> Result<(), RepositoryError> {
        let mut state = self.store.state.write().await;
        state.insert_calls += 1;

        if cancellation.is_cancelled() {
            return Err(RepositoryError::cancelled());
        }
        if let Some(message) = state.fail_next_insert.take() {
            return Err(RepositoryError::new(message));
        }
        if state.contains(&aggregate.id()) {
            return Err(RepositoryError::new(format!(
                "category {} already exists",
                aggregate.id()
            )));
        }

        debug!(category_id = %aggregate.id(), "staging category");
        state.staged.push(aggregate.clone());
        Ok(())
    }
}

/// Unit of work over an [`InMemoryCategoryStore`]
///
/// A failed commit discards the staged categories; a cancelled one keeps
/// them staged.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    store: InMemoryCategoryStore,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self, cancellation: &CancellationToken) -> Result<(), CommitError> {
        let mut state = self.store.state.write().await;
        state.commit_calls += 1;

        if cancellation.is_cancelled() {
            return Err(CommitError::cancelled());
        }
        if let Some(message) = state.fail_next_commit.take() {
            state.staged.clear();
            return Err(CommitError::new(message));
        }

        let staged = std::mem::take(&mut state.staged);
        debug!(count = staged.len(), "committing staged categories");
        for category in staged {
            state.committed.insert(category.id(), category);
        }
        Ok(())
    }
}
