// Copyright 2025 Cowboy AI, LLC.

//! Repository contract for staging aggregates

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::Category;
use crate::entity::AggregateRoot;
use crate::errors::RepositoryError;

/// Repository trait for staging aggregates
///
/// An insert only stages the aggregate. Nothing is durable until the
/// enclosing [`UnitOfWork`](crate::persistence::UnitOfWork) commits.
#[async_trait]
pub trait GenericRepository<A: AggregateRoot>: Send + Sync {
    /// Stage a new aggregate for persistence
    async fn insert(
        &self,
        aggregate: &A,
        cancellation: &CancellationToken,
    ) -> Result<(), RepositoryError>;
}

/// Repository for [`Category`] aggregates
pub trait CategoryRepository: GenericRepository<Category> {}

impl<T> CategoryRepository for T where T: GenericRepository<Category> {}
