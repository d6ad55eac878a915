// Copyright 2025 Cowboy AI, LLC.

//! CreateCategory use case
//!
//! Build the aggregate, stage it through the repository, then commit the
//! unit of work. Any failure aborts the remaining steps and is returned as
//! is; nothing is retried.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::UseCase;
use crate::domain::{Category, NewCategory};
use crate::errors::{CreateCategoryError, CreateCategoryStage};
use crate::persistence::{CategoryRepository, UnitOfWork};

/// Request to create a category
///
/// Fields arrive exactly as the caller sent them. Absent name or
/// description is rejected by the aggregate, not defaulted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    /// Category name
    pub name: Option<String>,
    /// Category description
    pub description: Option<String>,
    /// Whether the category starts active
    pub is_active: bool,
}

impl CreateCategoryInput {
    /// Build an input with every field present
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

impl From<CreateCategoryInput> for NewCategory {
    fn from(input: CreateCategoryInput) -> Self {
        NewCategory {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
        }
    }
}

/// Read-only projection of a created category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryOutput {
    /// Generated identifier
    pub id: Uuid,
    /// Category name
    pub name: String,
    /// Category description
    pub description: String,
    /// Activation flag
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id().as_uuid(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Creates a category and commits it through the unit of work
///
/// Each invocation builds its own aggregate; the handler keeps no state
/// between calls and can be shared across tasks.
#[derive(Clone)]
pub struct CreateCategory {
    repository: Arc<dyn CategoryRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateCategory {
    /// Create the use case over its collaborators
    pub fn new(repository: Arc<dyn CategoryRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    fn ensure_not_cancelled(
        cancellation: &CancellationToken,
        stage: CreateCategoryStage,
    ) -> Result<(), CreateCategoryError> {
        if cancellation.is_cancelled() {
            warn!(%stage, "create category cancelled");
            return Err(CreateCategoryError::Cancelled { stage });
        }
        Ok(())
    }
}

#[async_trait]
impl UseCase for CreateCategory {
    type Input = CreateCategoryInput;
    type Output = CreateCategoryOutput;
    type Error = CreateCategoryError;

    async fn handle(
        &self,
        input: CreateCategoryInput,
        cancellation: &CancellationToken,
    ) -> Result<CreateCategoryOutput, CreateCategoryError> {
        let category = Category::create(input.into()).map_err(|err| {
            warn!(field = err.field(), error = %err, "category rejected");
            err
        })?;
        debug!(category_id = %category.id(), "category built");

        Self::ensure_not_cancelled(cancellation, CreateCategoryStage::Stage)?;
        if let Err(err) = self.repository.insert(&category, cancellation).await {
            warn!(category_id = %category.id(), error = %err, "failed to stage category");
            return Err(err.into());
        }

        Self::ensure_not_cancelled(cancellation, CreateCategoryStage::Commit)?;
        if let Err(err) = self.unit_of_work.commit(cancellation).await {
            warn!(category_id = %category.id(), error = %err, "failed to commit category");
            return Err(err.into());
        }

        info!(
            category_id = %category.id(),
            name = category.name(),
            is_active = category.is_active(),
            "category created"
        );
        Ok(CreateCategoryOutput::from(&category))
    }
}
