//! Template operations for the TUI
//!
//! Gateway calls run on background tasks so the panel keeps redrawing
//! (spinner, notification timeout) while a request is in flight. The
//! workflow owns the outcome; the app only follows its state.

use std::future::Future;

use tracing::debug;

use super::state::{App, CurrentScreen};

impl App {
    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.push(tokio::spawn(task));
    }

    pub fn start_refresh(&mut self) {
        let store = self.panel.store.clone();
        self.spawn(async move {
            if let Err(e) = store.refresh().await {
                debug!("Refresh failed: {}", e);
            }
        });
    }

    pub fn open_create_form(&mut self) {
        self.clear_error();
        self.panel.workflow.open_create();
        self.current_screen = CurrentScreen::TemplateForm;
    }

    pub fn open_edit_form(&mut self) {
        let Some(template) = self.get_selected_template() else {
            return;
        };
        match self.panel.workflow.open_edit(&template.id) {
            Ok(()) => {
                self.clear_error();
                self.current_screen = CurrentScreen::TemplateForm;
            }
            Err(e) => self.set_error(e.message()),
        }
    }

    pub fn submit_form(&mut self) {
        let submitting = self.panel.workflow.with_form(|form| form.submitting);
        if submitting != Some(false) {
            return;
        }
        let workflow = self.panel.workflow.clone();
        self.spawn(async move {
            if let Err(e) = workflow.submit_form().await {
                debug!("Form submission failed: {}", e);
            }
        });
    }

    pub fn cancel_form(&mut self) {
        let submitting = self
            .panel
            .workflow
            .with_form(|form| form.submitting)
            .unwrap_or(false);
        if !submitting {
            self.panel.workflow.close_form();
            self.current_screen = CurrentScreen::Main;
        }
    }

    pub fn request_delete(&mut self) {
        let Some(template) = self.get_selected_template() else {
            return;
        };
        match self.panel.workflow.request_delete(&template.id) {
            Ok(()) => {
                self.clear_error();
                self.current_screen = CurrentScreen::DeleteConfirm;
            }
            Err(e) => self.set_error(e.message()),
        }
    }

    pub fn confirm_delete(&mut self) {
        if self
            .panel
            .workflow
            .pending_delete()
            .is_none_or(|ctx| ctx.deleting)
        {
            return;
        }
        let workflow = self.panel.workflow.clone();
        self.spawn(async move {
            if let Err(e) = workflow.confirm_delete().await {
                debug!("Delete failed: {}", e);
            }
        });
    }

    pub fn cancel_delete(&mut self) {
        self.panel.workflow.cancel_delete();
        if self.panel.workflow.pending_delete().is_none() {
            self.current_screen = CurrentScreen::Main;
        }
    }

    pub fn import_selected(&mut self) {
        let Some(template) = self.get_selected_template() else {
            return;
        };
        self.clear_error();
        let workflow = self.panel.workflow.clone();
        self.spawn(async move {
            if let Err(e) = workflow.import(&template.id).await {
                debug!("Import failed: {}", e);
            }
        });
    }

    /// Leave modal screens whose workflow context has closed
    pub fn sync_screen(&mut self) {
        match self.current_screen {
            CurrentScreen::TemplateForm if self.panel.workflow.form().is_none() => {
                self.current_screen = CurrentScreen::Main;
            }
            CurrentScreen::DeleteConfirm if self.panel.workflow.pending_delete().is_none() => {
                self.current_screen = CurrentScreen::Main;
            }
            _ => {}
        }
    }
}
