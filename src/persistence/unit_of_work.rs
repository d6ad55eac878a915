// Copyright 2025 Cowboy AI, LLC.

//! Unit of work contract

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::CommitError;

/// Commit boundary for changes staged through repositories
///
/// `commit` flushes everything staged in the current logical transaction
/// atomically: either all staged changes become durable or none do.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Flush all staged changes
    async fn commit(&self, cancellation: &CancellationToken) -> Result<(), CommitError>;
}
