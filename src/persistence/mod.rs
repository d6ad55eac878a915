// Copyright 2025 Cowboy AI, LLC.

//! # Persistence Boundary
//!
//! Capability traits the catalog core depends on, plus in-memory adapters.
//!
//! ## Components
//!
//! - **Repository**: stages aggregates for persistence
//! - **Unit of Work**: commits everything staged atomically
//! - **In-memory adapters**: shared-store implementations of both

pub mod in_memory;
pub mod repository;
pub mod unit_of_work;

pub use in_memory::{InMemoryCategoryRepository, InMemoryCategoryStore, InMemoryUnitOfWork};
pub use repository::{CategoryRepository, GenericRepository};
pub use unit_of_work::UnitOfWork;

#[cfg(test)]
pub use unit_of_work::MockUnitOfWork;
