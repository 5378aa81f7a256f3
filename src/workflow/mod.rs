//! Create / edit / delete / import flows
//!
//! Every flow has the same shape:
//!
//! ```text
//! validate ──> gateway call ──ok──> reconcile store ─> success notification ─> close
//!                          └─err──> danger notification (form stays open, delete closes)
//! ```
//!
//! The form and the delete confirmation are independent contexts guarded by
//! their own locks, so a delete and an edit on different templates can be
//! in flight at the same time. The store is held weakly: a response that
//! arrives after the panel has been torn down resolves to
//! [`TemplateError::Detached`] and touches nothing.

mod form;
pub mod messages;

pub use form::{FormField, FormMode, TemplateForm};

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::errors::{Result, TemplateError};
use crate::gateway::TemplateGateway;
use crate::models::{ImportOutcome, Template, Thumbnail};
use crate::notification::NotificationChannel;
use crate::store::TemplateListStore;

/// Template selected in the delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContext {
    pub template_id: String,
    pub template_name: String,
    pub deleting: bool,
}

pub struct MutationWorkflow {
    gateway: Arc<dyn TemplateGateway>,
    store: Weak<TemplateListStore>,
    notifications: Arc<NotificationChannel>,
    form: Mutex<Option<TemplateForm>>,
    pending_delete: Mutex<Option<DeleteContext>>,
}

impl MutationWorkflow {
    pub fn new(store: &Arc<TemplateListStore>, notifications: Arc<NotificationChannel>) -> Self {
        Self {
            gateway: store.gateway().clone(),
            store: Arc::downgrade(store),
            notifications,
            form: Mutex::new(None),
            pending_delete: Mutex::new(None),
        }
    }

    pub fn notifications(&self) -> &Arc<NotificationChannel> {
        &self.notifications
    }

    fn store(&self) -> Result<Arc<TemplateListStore>> {
        self.store.upgrade().ok_or_else(|| {
            debug!("Template store dropped, ignoring response");
            TemplateError::Detached
        })
    }

    // ============ Form (create / edit) ============

    pub fn open_create(&self) {
        *self.form.lock() = Some(TemplateForm::create());
    }

    pub fn open_edit(&self, id: &str) -> Result<()> {
        let template = self
            .store()?
            .find(id)
            .ok_or_else(|| TemplateError::validation(format!("Template not found: {}", id)))?;
        *self.form.lock() = Some(TemplateForm::edit(&template));
        Ok(())
    }

    pub fn close_form(&self) {
        *self.form.lock() = None;
    }

    /// Snapshot of the open form
    pub fn form(&self) -> Option<TemplateForm> {
        self.form.lock().clone()
    }

    /// Mutate the open form in place
    pub fn with_form<R>(&self, f: impl FnOnce(&mut TemplateForm) -> R) -> Option<R> {
        self.form.lock().as_mut().map(f)
    }

    /// Validate and submit the open form
    ///
    /// On success the store is refreshed, a success notification is shown
    /// and the form closes. On failure the form stays open with the error
    /// inline so nothing has to be re-entered.
    pub async fn submit_form(&self) -> Result<Template> {
        let (mode, mut fields, thumbnail_path) = {
            let mut guard = self.form.lock();
            let form = guard
                .as_mut()
                .ok_or_else(|| TemplateError::validation("No template form is open"))?;
            if form.submitting {
                return Err(TemplateError::validation("The form is already being submitted"));
            }
            form.error = None;
            match form.validate() {
                Ok(fields) => {
                    form.submitting = true;
                    (form.mode.clone(), fields, form.thumbnail_path.trim().to_string())
                }
                Err(e) => {
                    form.error = Some(e.message());
                    return Err(e);
                }
            }
        };

        if !thumbnail_path.is_empty() {
            match Thumbnail::load(&thumbnail_path).await {
                Ok(thumbnail) => {
                    self.with_form(|form| form.set_thumbnail(thumbnail.clone()));
                    fields.thumbnail = Some(thumbnail);
                }
                Err(e) => {
                    warn!("{}", e);
                    self.fail_form(&e);
                    return Err(e);
                }
            }
        }

        let result = match &mode {
            FormMode::Create => self.gateway.create(&fields).await,
            FormMode::Edit { id } => self.gateway.update(id, &fields).await,
        };
        let store = self.store()?;

        match result {
            Ok(template) => {
                info!("Template {} saved ({})", template.id, template.display_name);
                if let Err(e) = store.refresh().await {
                    warn!("Refresh after save failed: {}", e);
                }
                self.notifications.success(match mode {
                    FormMode::Create => messages::CREATE_SUCCESS,
                    FormMode::Edit { .. } => messages::UPDATE_SUCCESS,
                });
                self.close_form();
                Ok(template)
            }
            Err(e) => {
                warn!("Saving template failed: {}", e);
                self.notifications.danger(match mode {
                    FormMode::Create => messages::CREATE_ERROR,
                    FormMode::Edit { .. } => messages::UPDATE_ERROR,
                });
                self.fail_form(&e);
                Err(e)
            }
        }
    }

    fn fail_form(&self, error: &TemplateError) {
        self.with_form(|form| {
            form.submitting = false;
            form.error = Some(error.format_simple());
        });
    }

    // ============ Delete ============

    /// Open the confirmation for `id`
    pub fn request_delete(&self, id: &str) -> Result<()> {
        let template = self
            .store()?
            .find(id)
            .ok_or_else(|| TemplateError::validation(format!("Template not found: {}", id)))?;

        let mut pending = self.pending_delete.lock();
        if pending.as_ref().is_some_and(|ctx| ctx.deleting) {
            return Err(TemplateError::validation("A delete is already in progress"));
        }
        *pending = Some(DeleteContext {
            template_id: template.id,
            template_name: template.display_name,
            deleting: false,
        });
        Ok(())
    }

    pub fn cancel_delete(&self) {
        let mut pending = self.pending_delete.lock();
        if !pending.as_ref().is_some_and(|ctx| ctx.deleting) {
            *pending = None;
        }
    }

    pub fn pending_delete(&self) -> Option<DeleteContext> {
        self.pending_delete.lock().clone()
    }

    /// Delete the template awaiting confirmation
    ///
    /// The confirmation closes whatever the outcome; a second confirm while
    /// the request is pending is rejected.
    pub async fn confirm_delete(&self) -> Result<()> {
        let id = {
            let mut pending = self.pending_delete.lock();
            let ctx = pending
                .as_mut()
                .ok_or_else(|| TemplateError::validation("No template selected for deletion"))?;
            if ctx.deleting {
                return Err(TemplateError::validation("A delete is already in progress"));
            }
            ctx.deleting = true;
            ctx.template_id.clone()
        };

        let result = self.gateway.remove(&id).await;
        {
            let mut pending = self.pending_delete.lock();
            if pending.as_ref().is_some_and(|ctx| ctx.template_id == id) {
                *pending = None;
            }
        }
        let store = self.store()?;

        match result {
            Ok(()) => {
                info!("Template {} deleted", id);
                store.remove_locally(&id);
                self.notifications.success(messages::DELETE_SUCCESS);
                Ok(())
            }
            Err(e) => {
                warn!("Deleting template {} failed: {}", id, e);
                self.notifications.danger(messages::DELETE_ERROR);
                Err(e)
            }
        }
    }

    // ============ Import ============

    /// Import or download the template, depending on the gateway mode
    pub async fn import(&self, id: &str) -> Result<ImportOutcome> {
        let template = self
            .store()?
            .find(id)
            .ok_or_else(|| TemplateError::validation(format!("Template not found: {}", id)))?;

        let result = self
            .gateway
            .trigger_import(&template.id, &template.package_url)
            .await;
        self.store()?;

        match result {
            Ok(outcome) => {
                match &outcome {
                    ImportOutcome::Downloaded(path) => self
                        .notifications
                        .success(format!("Template downloaded to {}", path.display())),
                    ImportOutcome::Navigate(location) => self
                        .notifications
                        .success(format!("Course imported, continue at {}", location)),
                }
                Ok(outcome)
            }
            Err(e) => {
                warn!("Importing template {} failed: {}", id, e);
                self.notifications.danger(messages::IMPORT_ERROR);
                Err(e)
            }
        }
    }
}
