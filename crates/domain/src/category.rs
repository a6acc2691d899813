//! Category — a server-owned grouping of books, and the body used to write one.

use serde::{Deserialize, Serialize};

use crate::error::{LibdashError, ValidationError};
use crate::id::CategoryId;
use crate::time::Timestamp;

/// Editor label recorded when the form leaves `who_edited` blank.
pub const DEFAULT_EDITOR: &str = "Admin";

/// A category as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(default)]
    pub category_description: Option<String>,
    #[serde(default)]
    pub who_edited: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Category {
    /// Minimal category, mostly useful for fixtures.
    #[must_use]
    pub fn new(category_id: CategoryId, category_name: impl Into<String>) -> Self {
        Self {
            category_id,
            category_name: category_name.into(),
            category_description: None,
            who_edited: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Body sent to create or update a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub category_name: String,
    pub category_description: String,
    pub who_edited: String,
}

impl CategoryInput {
    #[must_use]
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.category_description = description.into();
        self
    }

    #[must_use]
    pub fn who_edited(mut self, who_edited: impl Into<String>) -> Self {
        self.who_edited = who_edited.into();
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LibdashError::Validation`] when `category_name` is blank.
    pub fn validate(&self) -> Result<(), LibdashError> {
        if self.category_name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Prepare the input for sending.
    ///
    /// Leading and trailing whitespace is removed from `category_name`; the
    /// server receives the trimmed name. An empty or whitespace-only
    /// `who_edited` is replaced by [`DEFAULT_EDITOR`], while a non-blank
    /// editor is sent as typed, untrimmed. `category_description` is never
    /// changed.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.category_name = self.category_name.trim().to_string();
        if self.who_edited.trim().is_empty() {
            self.who_edited = DEFAULT_EDITOR.to_string();
        }
        self
    }
}
