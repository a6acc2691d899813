//! Category form — the transient create/edit state owned by the view.
//!
//! ```text
//! Idle ──start_create──▶ Creating ──submit ok / cancel──▶ Idle
//! Idle ──start_edit────▶ Editing  ──submit ok / cancel──▶ Idle
//! ```
//!
//! `start_edit` while already editing replaces the target; `start_create`
//! while editing drops the edit.

use libdash_domain::category::{Category, CategoryInput};
use libdash_domain::id::CategoryId;

/// Which form, if any, is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    Editing(Category),
}

/// Field values plus the mode they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    mode: FormMode,
    pub category_name: String,
    pub category_description: String,
    pub who_edited: String,
}

impl CategoryForm {
    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.mode, FormMode::Idle)
    }

    /// Category being edited, if the form is in edit mode.
    #[must_use]
    pub fn editing(&self) -> Option<&Category> {
        match &self.mode {
            FormMode::Editing(category) => Some(category),
            FormMode::Idle | FormMode::Creating => None,
        }
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<CategoryId> {
        self.editing().map(|category| category.category_id)
    }

    /// Open an empty form in create mode.
    pub fn start_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    /// Open the form pre-filled from `category`.
    pub fn start_edit(&mut self, category: &Category) {
        *self = Self {
            category_name: category.category_name.clone(),
            category_description: category.category_description.clone().unwrap_or_default(),
            who_edited: category.who_edited.clone().unwrap_or_default(),
            mode: FormMode::Editing(category.clone()),
        };
    }

    /// Close the form and clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Close the form only if it still targets what was submitted: `None`
    /// for a create, the category id for an update.
    ///
    /// A form reopened for something else while the write was in flight
    /// stays open.
    pub fn close_submitted(&mut self, target: Option<CategoryId>) {
        let still_open = match &self.mode {
            FormMode::Idle => false,
            FormMode::Creating => target.is_none(),
            FormMode::Editing(category) => target == Some(category.category_id),
        };
        if still_open {
            self.reset();
        }
    }

    /// Current field values as a request body.
    #[must_use]
    pub fn input(&self) -> CategoryInput {
        CategoryInput {
            category_name: self.category_name.clone(),
            category_description: self.category_description.clone(),
            who_edited: self.who_edited.clone(),
        }
    }
}
