//! Shared test helpers: an in-memory template gateway

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use template_desk::config::PanelConfig;
use template_desk::errors::{Result, TemplateError};
use template_desk::gateway::TemplateGateway;
use template_desk::models::{ImportOutcome, Template, TemplateFields, TemplateMetadata};
use template_desk::runtime::lifetime::PanelContext;

pub fn template(id: &str, name: &str) -> Template {
    Template {
        id: id.to_string(),
        display_name: name.to_string(),
        package_url: format!("https://cdn.example.com/{}.tar.gz", id),
        metadata: Some(TemplateMetadata {
            title: None,
            description: Some(format!("About {}", name)),
            thumbnail_url: None,
        }),
    }
}

#[derive(Default)]
pub struct CallCounts {
    pub list: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub remove: AtomicUsize,
    pub import: AtomicUsize,
}

impl CallCounts {
    pub fn mutations(&self) -> usize {
        self.create.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.remove.load(Ordering::SeqCst)
    }
}

/// Backend double with the same semantics as the real collection endpoint
#[derive(Default)]
pub struct FakeGateway {
    templates: Mutex<Vec<Template>>,
    next_id: AtomicU64,
    pub calls: CallCounts,
    pub fail_list: AtomicBool,
    pub fail_mutations: AtomicBool,
    /// Delays applied to successive `list` calls, in call order
    list_delays: Mutex<VecDeque<Duration>>,
    remove_delay: Mutex<Option<Duration>>,
    pub last_fields: Mutex<Option<TemplateFields>>,
}

impl FakeGateway {
    pub fn with_templates(templates: Vec<Template>) -> Arc<Self> {
        let gateway = Self::default();
        gateway.next_id.store(100, Ordering::SeqCst);
        *gateway.templates.lock() = templates;
        Arc::new(gateway)
    }

    pub fn insert(&self, template: Template) {
        self.templates.lock().push(template);
    }

    pub fn ids(&self) -> Vec<String> {
        self.templates.lock().iter().map(|t| t.id.clone()).collect()
    }

    pub fn push_list_delay(&self, delay: Duration) {
        self.list_delays.lock().push_back(delay);
    }

    pub fn set_remove_delay(&self, delay: Duration) {
        *self.remove_delay.lock() = Some(delay);
    }

    fn mutation_failure(&self) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err(TemplateError::http(500, "internal error"))
        } else {
            Ok(())
        }
    }

    fn build(&self, id: String, fields: &TemplateFields) -> Template {
        Template {
            id,
            display_name: fields.name.clone(),
            package_url: fields.package_url.clone(),
            metadata: Some(TemplateMetadata {
                title: None,
                description: Some(fields.description.clone()),
                thumbnail_url: fields
                    .thumbnail
                    .as_ref()
                    .map(|t| format!("/media/{}", t.file_name)),
            }),
        }
    }
}

#[async_trait]
impl TemplateGateway for FakeGateway {
    async fn list(&self) -> Result<Vec<Template>> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.templates.lock().clone();
        let delay = self.list_delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(TemplateError::network("connection refused"));
        }
        Ok(snapshot)
    }

    async fn create(&self, fields: &TemplateFields) -> Result<Template> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        *self.last_fields.lock() = Some(fields.clone());
        self.mutation_failure()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let template = self.build(id, fields);
        self.templates.lock().push(template.clone());
        Ok(template)
    }

    async fn update(&self, id: &str, fields: &TemplateFields) -> Result<Template> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        *self.last_fields.lock() = Some(fields.clone());
        self.mutation_failure()?;
        let updated = self.build(id.to_string(), fields);
        let mut templates = self.templates.lock();
        let slot = templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::http(404, "Not found."))?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.calls.remove.fetch_add(1, Ordering::SeqCst);
        let delay = *self.remove_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.mutation_failure()?;
        let mut templates = self.templates.lock();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(TemplateError::http(404, "Not found."));
        }
        Ok(())
    }

    async fn trigger_import(&self, id: &str, _package_url: &str) -> Result<ImportOutcome> {
        self.calls.import.fetch_add(1, Ordering::SeqCst);
        self.mutation_failure()?;
        Ok(ImportOutcome::Navigate(format!("/course/{}", id)))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn panel_with(gateway: Arc<FakeGateway>) -> PanelContext {
    PanelContext::with_gateway(gateway, &PanelConfig::default())
}
