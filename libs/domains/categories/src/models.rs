use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Rejects names that are empty once surrounding whitespace is removed
pub fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be blank".into()));
    }
    Ok(())
}

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Server-assigned identifier, never reused
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: i32, input: CreateCategory) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and bump `updated_at`
    pub fn apply_update(&mut self, input: UpdateCategory) {
        self.name = input.name;
        self.description = input.description;
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "name must be at most 255 characters")
    )]
    #[schema(example = "Electronics")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Electronic devices")]
    pub description: String,
}

/// DTO for replacing a category's fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "name must be at most 255 characters")
    )]
    pub name: String,

    #[serde(default)]
    pub description: String,
}
