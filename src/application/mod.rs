// Copyright 2025 Cowboy AI, LLC.

//! Application use cases
//!
//! Use cases orchestrate aggregates and persistence collaborators. They
//! return their output projection or an error; nothing in between.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub mod create_category;

pub use create_category::{CreateCategory, CreateCategoryInput, CreateCategoryOutput};

/// Handler for a single application request
#[async_trait]
pub trait UseCase: Send + Sync {
    /// Request accepted by the handler
    type Input: Send;
    /// Projection returned on success
    type Output;
    /// Failure returned when any step aborts
    type Error;

    /// Run the use case to completion or to the first failure
    async fn handle(
        &self,
        input: Self::Input,
        cancellation: &CancellationToken,
    ) -> Result<Self::Output, Self::Error>;
}
