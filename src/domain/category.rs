// Copyright 2025 Cowboy AI, LLC.

//! Category aggregate
//!
//! A Category is never observable in an invalid state. Every constructor and
//! mutator validates the prospective field values first and only assigns them
//! once every rule passes, so a failed call leaves the aggregate untouched.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::validation;
use crate::entity::{AggregateRoot, CategoryMarker, EntityId};
use crate::errors::DomainResult;

/// Identifier of a [`Category`]
pub type CategoryId = EntityId<CategoryMarker>;

/// Minimum number of characters in a category name
pub const NAME_MIN_LENGTH: usize = 3;
/// Maximum number of characters in a category name
pub const NAME_MAX_LENGTH: usize = 255;
/// Maximum number of characters in a category description
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

const NAME_FIELD: &str = "Name";
const DESCRIPTION_FIELD: &str = "Description";

/// Field values for a category that may still be missing
///
/// This is the shape transports hand over when a field can be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Display name
    pub name: Option<String>,
    /// Free text description, may be empty but not absent
    pub description: Option<String>,
    /// Whether the category starts active
    pub is_active: bool,
}

/// Changes to apply to an existing category, with a name that may be absent
///
/// An absent description keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement description
    pub description: Option<String>,
}

/// Category aggregate root
///
/// # Examples
///
/// ```rust
/// use catalog_domain::Category;
///
/// let mut category = Category::new("Electronics", "Consumer electronics").unwrap();
/// assert!(category.is_active());
///
/// category.deactivate().unwrap();
/// assert!(!category.is_active());
///
/// let err = category.update("TV", None).unwrap_err();
/// assert_eq!(err.to_string(), "Name should be at least 3 characters long");
/// assert_eq!(category.name(), "Electronics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit activation flag
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        Self::create(NewCategory {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        })
    }

    /// Create a category from fields that may be absent
    ///
    /// The id and creation timestamp are assigned here. Nothing is returned
    /// unless every rule passes; the error names the first rule violated.
    pub fn create(draft: NewCategory) -> DomainResult<Self> {
        validate(draft.name.as_deref(), draft.description.as_deref())?;
        let name = validation::not_null(draft.name, NAME_FIELD)?;
        let description = validation::not_null(draft.description, DESCRIPTION_FIELD)?;

        Ok(Self {
            id: CategoryId::new(),
            name,
            description,
            is_active: draft.is_active,
            created_at: Utc::now(),
        })
    }

    /// Unique identifier, fixed at construction
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the category is active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the category was constructed
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the category active
    pub fn activate(&mut self) -> DomainResult<()> {
        self.set_active(true)
    }

    /// Mark the category inactive
    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.set_active(false)
    }

    /// Replace the name, and the description when one is given
    ///
    /// Passing `None` keeps the current description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> DomainResult<()> {
        self.apply(CategoryUpdate {
            name: Some(name.into()),
            description,
        })
    }

    /// Apply changes whose name may be absent
    ///
    /// An absent name fails with the same error as a blank one.
    pub fn apply(&mut self, changes: CategoryUpdate) -> DomainResult<()> {
        validate(
            changes.name.as_deref(),
            Some(
                changes
                    .description
                    .as_deref()
                    .unwrap_or(self.description.as_str()),
            ),
        )?;
        let name = validation::not_null(changes.name, NAME_FIELD)?;

        self.name = name;
        if let Some(description) = changes.description {
            self.description = description;
        }
        Ok(())
    }

    fn set_active(&mut self, is_active: bool) -> DomainResult<()> {
        validate(Some(self.name.as_str()), Some(self.description.as_str()))?;
        self.is_active = is_active;
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Run the rules in order and stop at the first failure
fn validate(name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
    let name = validation::not_null_or_empty(name, NAME_FIELD)?;
    validation::min_length(name, NAME_MIN_LENGTH, NAME_FIELD)?;
    validation::max_length(name, NAME_MAX_LENGTH, NAME_FIELD)?;

    let description = validation::not_null(description, DESCRIPTION_FIELD)?;
    validation::max_length(description, DESCRIPTION_MAX_LENGTH, DESCRIPTION_FIELD)?;

    Ok(())
}
