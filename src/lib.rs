// Copyright 2025 Cowboy AI, LLC.

//! # Catalog Domain
//!
//! Core of a content catalog: the Category aggregate and the CreateCategory
//! use case.
//!
//! This crate provides:
//! - **Validation**: stateless field checks producing typed failures
//! - **Category**: a self-validating aggregate root
//! - **Repository / Unit of Work**: capability traits for staging and committing
//! - **CreateCategory**: build → stage → commit, returning an output projection
//!
//! ## Design Principles
//!
//! 1. **Never invalid**: aggregates validate a candidate state before assigning it
//! 2. **Opaque collaborators**: persistence lives behind traits, injected as `Arc<dyn _>`
//! 3. **No partial success**: a use case returns its output or the first error
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_domain::{
//!     CreateCategory, CreateCategoryInput, InMemoryCategoryStore, UseCase,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryCategoryStore::new();
//! let use_case = CreateCategory::new(
//!     Arc::new(store.repository()),
//!     Arc::new(store.unit_of_work()),
//! );
//!
//! let input = CreateCategoryInput::new("Electronics", "Consumer electronics", true);
//! let output = use_case.handle(input, &CancellationToken::new()).await.unwrap();
//!
//! assert_eq!(output.name, "Electronics");
//! assert_eq!(store.committed().await.len(), 1);
//! # });
//! ```

#![warn(missing_docs)]

mod entity;
mod errors;

pub mod application;
pub mod domain;
pub mod persistence;

// Re-export core types
pub use application::{CreateCategory, CreateCategoryInput, CreateCategoryOutput, UseCase};
pub use domain::{
    Category, CategoryId, CategoryUpdate, NewCategory, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};
pub use entity::{AggregateRoot, CategoryMarker, EntityId};
pub use errors::{
    CommitError, CreateCategoryError, CreateCategoryStage, DomainResult, RepositoryError,
    ValidationError,
};
pub use persistence::{
    CategoryRepository, GenericRepository, InMemoryCategoryRepository, InMemoryCategoryStore,
    InMemoryUnitOfWork, UnitOfWork,
};
