//! Category store — the category list plus the create/update/archive
//! lifecycle and its form.
//!
//! The list is only ever replaced wholesale by a successful fetch; writes
//! never patch it locally but re-fetch it instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use libdash_domain::category::{Category, CategoryInput};
use libdash_domain::error::LibdashError;
use libdash_domain::id::CategoryId;

use crate::error_board::{ErrorBoard, Resource};
use crate::form::{CategoryForm, FormMode};
use crate::ports::{Confirmation, LibraryApi};
use crate::services::stats_fetcher::StatsFetcher;
use crate::slot::{self, SharedSlot, StalePolicy};

/// Message raised when the category list cannot be loaded.
pub const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";
/// Message raised when a create or update fails without a usable message.
pub const SAVE_CATEGORY_FAILED: &str = "Failed to save category";
/// Message raised when archiving fails.
pub const ARCHIVE_CATEGORY_FAILED: &str = "Failed to delete category";
/// Prompt shown before archiving.
pub const ARCHIVE_PROMPT: &str = "Are you sure you want to delete this category?";

/// Result of a create, update or form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Option<Category>),
    Updated(Option<Category>),
    /// Another create or update is still waiting for its response.
    Busy,
    /// No form is open, so there is nothing to submit.
    Closed,
}

/// Result of an archive request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Archived,
    /// The operator declined the confirmation; no request was sent.
    Declined,
}

/// Holds the submit-in-progress flag for as long as it lives.
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Category list, form and write operations.
pub struct CategoryStore<A> {
    api: Arc<A>,
    slot: SharedSlot<Vec<Category>>,
    form: Arc<Mutex<CategoryForm>>,
    submitting: Arc<AtomicBool>,
    stats: StatsFetcher<A>,
    errors: Arc<ErrorBoard>,
}

impl<A> Clone for CategoryStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            slot: Arc::clone(&self.slot),
            form: Arc::clone(&self.form),
            submitting: Arc::clone(&self.submitting),
            stats: self.stats.clone(),
            errors: Arc::clone(&self.errors),
        }
    }
}

impl<A: LibraryApi> CategoryStore<A> {
    /// Create a store. `stats` is re-fetched after creates and archives.
    pub fn new(
        api: Arc<A>,
        stats: StatsFetcher<A>,
        errors: Arc<ErrorBoard>,
        policy: StalePolicy,
    ) -> Self {
        Self {
            api,
            slot: slot::shared(policy),
            form: Arc::new(Mutex::new(CategoryForm::default())),
            submitting: Arc::new(AtomicBool::new(false)),
            stats,
            errors,
        }
    }

    /// Fetch the category list, replacing the held list on success.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the [`LibraryApi`]; the previous list
    /// is kept and [`FETCH_CATEGORIES_FAILED`] is raised on the error board.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, LibdashError> {
        slot::track(
            &self.slot,
            &self.errors,
            Resource::Categories,
            FETCH_CATEGORIES_FAILED,
            self.api.list_categories(),
        )
        .await
    }

    /// Create a category, then re-fetch both the list and the summary.
    ///
    /// The input goes through [`CategoryInput::normalized`]: the name is
    /// trimmed and a blank `who_edited` becomes the default editor label. On
    /// success the error board is cleared and a create form that is still
    /// open is closed; a form opened for an edit in the meantime stays.
    ///
    /// # Errors
    ///
    /// Returns [`LibdashError::Validation`] for a blank name (no request is
    /// sent) or whatever the [`LibraryApi`] reported. The form is left
    /// untouched so the input can be corrected.
    #[tracing::instrument(skip(self, input), fields(category_name = %input.category_name))]
    pub async fn create(&self, input: CategoryInput) -> Result<SubmitOutcome, LibdashError> {
        let Some(guard) = SubmitGuard::acquire(&self.submitting) else {
            tracing::debug!("submission already in progress");
            return Ok(SubmitOutcome::Busy);
        };
        let input = self.prepare(input)?;

        let created = self
            .api
            .create_category(&input)
            .await
            .inspect_err(|err| self.surface_save_error(err))?;
        drop(guard);
        self.finish_submit(None);

        let _ = tokio::join!(self.list(), self.stats.fetch());
        Ok(SubmitOutcome::Created(created))
    }

    /// Update the category `id`, then re-fetch the list.
    ///
    /// Unlike create and archive, the summary is not re-fetched. On success
    /// the form is closed only if it still edits `id`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    #[tracing::instrument(skip(self, input), fields(category_name = %input.category_name))]
    pub async fn update(
        &self,
        id: CategoryId,
        input: CategoryInput,
    ) -> Result<SubmitOutcome, LibdashError> {
        let Some(guard) = SubmitGuard::acquire(&self.submitting) else {
            tracing::debug!("submission already in progress");
            return Ok(SubmitOutcome::Busy);
        };
        let input = self.prepare(input)?;

        let updated = self
            .api
            .update_category(id, &input)
            .await
            .inspect_err(|err| self.surface_save_error(err))?;
        drop(guard);
        self.finish_submit(Some(id));

        let _ = self.list().await;
        Ok(SubmitOutcome::Updated(updated))
    }

    /// Submit the open form: create in create mode, update in edit mode.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn submit(&self) -> Result<SubmitOutcome, LibdashError> {
        let (mode, input) = {
            let form = slot::lock(&self.form);
            (form.mode().clone(), form.input())
        };
        match mode {
            FormMode::Idle => Ok(SubmitOutcome::Closed),
            FormMode::Creating => self.create(input).await,
            FormMode::Editing(category) => self.update(category.category_id, input).await,
        }
    }

    /// Archive the category `id` after `confirm` approves, then re-fetch
    /// both the list and the summary.
    ///
    /// # Errors
    ///
    /// Returns whatever the [`LibraryApi`] reported; nothing local is rolled
    /// back because nothing was changed ahead of the response.
    #[tracing::instrument(skip(self, confirm))]
    pub async fn archive(
        &self,
        id: CategoryId,
        confirm: &impl Confirmation,
    ) -> Result<ArchiveOutcome, LibdashError> {
        if !confirm.confirm(ARCHIVE_PROMPT) {
            tracing::debug!("archive declined");
            return Ok(ArchiveOutcome::Declined);
        }

        self.api
            .archive_category(id)
            .await
            .inspect_err(|err| self.surface_archive_error(err))?;

        let _ = tokio::join!(self.list(), self.stats.fetch());
        Ok(ArchiveOutcome::Archived)
    }

    /// Open an empty create form.
    pub fn start_create(&self) {
        slot::lock(&self.form).start_create();
        self.errors.clear_all();
    }

    /// Open the form pre-filled from `category`.
    pub fn start_edit(&self, category: &Category) {
        slot::lock(&self.form).start_edit(category);
        self.errors.clear_all();
    }

    /// Close the form without sending anything.
    pub fn cancel(&self) {
        slot::lock(&self.form).reset();
    }

    /// Change form fields in place.
    pub fn edit_form<R>(&self, edit: impl FnOnce(&mut CategoryForm) -> R) -> R {
        edit(&mut slot::lock(&self.form))
    }

    /// Snapshot of the form.
    #[must_use]
    pub fn form(&self) -> CategoryForm {
        slot::lock(&self.form).clone()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        slot::lock(&self.slot).is_loading()
    }

    /// Last successfully fetched list, in server order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        slot::lock(&self.slot).value().cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn find(&self, id: CategoryId) -> Option<Category> {
        slot::lock(&self.slot)
            .value()
            .and_then(|list| list.iter().find(|c| c.category_id == id).cloned())
    }

    fn prepare(&self, input: CategoryInput) -> Result<CategoryInput, LibdashError> {
        if let Err(err) = input.validate() {
            self.surface_save_error(&err);
            return Err(err);
        }
        Ok(input.normalized())
    }

    fn surface_save_error(&self, err: &LibdashError) {
        let message = err
            .user_message()
            .unwrap_or_else(|| SAVE_CATEGORY_FAILED.to_string());
        tracing::warn!(error = %err, %message, "failed to save category");
        self.errors.raise(Resource::CategoryMutation, message);
    }

    fn surface_archive_error(&self, err: &LibdashError) {
        tracing::warn!(error = %err, "{ARCHIVE_CATEGORY_FAILED}");
        self.errors
            .raise(Resource::CategoryMutation, ARCHIVE_CATEGORY_FAILED);
    }

    /// `target` is `None` for a create and the category id for an update.
    fn finish_submit(&self, target: Option<CategoryId>) {
        slot::lock(&self.form).close_submitted(target);
        self.errors.clear_all();
    }
}
