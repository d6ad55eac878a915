// Copyright 2025 Cowboy AI, LLC.

//! Catalog domain model
//!
//! Field validation rules and the Category aggregate that enforces them.

pub mod category;
pub mod validation;

pub use category::{
    Category, CategoryId, CategoryUpdate, NewCategory, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};
