// Copyright 2025 Cowboy AI, LLC.

//! Error types for catalog domain operations

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// An entity invariant was violated
///
/// Carries the label of the offending field and the message of the first
/// rule that failed. Displays as the bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Label of the field that failed validation
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human readable description of the violated rule
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, ValidationError>;

/// Failure raised by a repository while staging an aggregate
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RepositoryError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl RepositoryError {
    /// Create a repository error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying storage error
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The insert observed a cancelled token
    pub fn cancelled() -> Self {
        Self::new("repository operation cancelled")
    }
}

/// Failure raised by a unit of work while flushing staged changes
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommitError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl CommitError {
    /// Create a commit error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying transaction error
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The commit observed a cancelled token
    pub fn cancelled() -> Self {
        Self::new("commit cancelled")
    }
}

/// Step of the create-category protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreateCategoryStage {
    /// Constructing and validating the aggregate
    Build,
    /// Handing the aggregate to the repository
    Stage,
    /// Flushing the unit of work
    Commit,
}

impl fmt::Display for CreateCategoryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreateCategoryStage::Build => "build",
            CreateCategoryStage::Stage => "stage",
            CreateCategoryStage::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// Errors returned by the CreateCategory use case
#[derive(Debug, Error)]
pub enum CreateCategoryError {
    /// The input violated a Category invariant; nothing was persisted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The repository refused to stage the category
    #[error(transparent)]
    Persistence(#[from] RepositoryError),

    /// The unit of work failed to commit
    #[error(transparent)]
    Commit(#[from] CommitError),

    /// Cancellation was requested before the named step ran
    #[error("create category cancelled before {stage}")]
    Cancelled {
        /// Step that was abandoned
        stage: CreateCategoryStage,
    },
}

impl CreateCategoryError {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CreateCategoryError::Validation(_))
    }

    /// Check if this came from the repository
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, CreateCategoryError::Persistence(_))
    }

    /// Check if this came from the unit of work
    pub fn is_commit_error(&self) -> bool {
        matches!(self, CreateCategoryError::Commit(_))
    }

    /// Check if the invocation was abandoned through cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CreateCategoryError::Cancelled { .. })
    }

    /// Stage at which the invocation stopped
    pub fn stage(&self) -> CreateCategoryStage {
        match self {
            CreateCategoryError::Validation(_) => CreateCategoryStage::Build,
            CreateCategoryError::Persistence(_) => CreateCategoryStage::Stage,
            CreateCategoryError::Commit(_) => CreateCategoryStage::Commit,
            CreateCategoryError::Cancelled { stage } => *stage,
        }
    }
}
