//! In-memory template collection kept in sync with the gateway
//!
//! ```text
//! Idle ──refresh()──> Loading ──ok──> Ready(templates)
//!                            └─err──> Failed(message)
//! ```
//!
//! Only list failures move the store to `Failed`; mutation failures never
//! touch it. Create/update are followed by a full refresh, deletes are
//! applied locally with [`TemplateListStore::remove_locally`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::gateway::TemplateGateway;
use crate::models::Template;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollectionState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Template>),
    Failed(String),
}

impl CollectionState {
    pub fn templates(&self) -> Option<&[Template]> {
        match self {
            CollectionState::Ready(templates) => Some(templates),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CollectionState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CollectionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

struct Inner {
    state: CollectionState,
    /// Ticket of the refresh whose result is currently shown
    applied: u64,
}

pub struct TemplateListStore {
    gateway: Arc<dyn TemplateGateway>,
    inner: RwLock<Inner>,
    issued: AtomicU64,
}

impl TemplateListStore {
    pub fn new(gateway: Arc<dyn TemplateGateway>) -> Self {
        Self {
            gateway,
            inner: RwLock::new(Inner {
                state: CollectionState::Idle,
                applied: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    pub fn gateway(&self) -> &Arc<dyn TemplateGateway> {
        &self.gateway
    }

    /// Snapshot of the current state
    pub fn state(&self) -> CollectionState {
        self.inner.read().state.clone()
    }

    /// Templates of a `Ready` store, empty otherwise
    pub fn templates(&self) -> Vec<Template> {
        self.inner
            .read()
            .state
            .templates()
            .map(<[Template]>::to_vec)
            .unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<Template> {
        self.inner
            .read()
            .state
            .templates()
            .and_then(|templates| templates.iter().find(|t| t.id == id).cloned())
    }

    /// Reload the whole collection from the gateway
    ///
    /// Returns the number of templates received. When refreshes overlap, a
    /// response older than the one already applied is discarded.
    pub async fn refresh(&self) -> Result<usize> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.write().state = CollectionState::Loading;

        let result = self.gateway.list().await;

        let mut inner = self.inner.write();
        if ticket < inner.applied {
            debug!(
                "Discarding refresh #{} (#{} already applied)",
                ticket, inner.applied
            );
            return result.map(|templates| templates.len());
        }
        inner.applied = ticket;

        match result {
            Ok(templates) => {
                let count = templates.len();
                debug!("Loaded {} templates", count);
                inner.state = CollectionState::Ready(templates);
                Ok(count)
            }
            Err(e) => {
                warn!("Failed to load templates: {}", e);
                inner.state = CollectionState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Drop `id` from a `Ready` collection without refetching
    pub fn remove_locally(&self, id: &str) -> bool {
        let mut inner = self.inner.write();
        match &mut inner.state {
            CollectionState::Ready(templates) => {
                let before = templates.len();
                templates.retain(|t| t.id != id);
                templates.len() != before
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_state_accessors() {
        assert!(CollectionState::Loading.is_loading());
        assert_eq!(
            CollectionState::Failed("boom".into()).error(),
            Some("boom")
        );
        assert!(CollectionState::Idle.templates().is_none());
        assert_eq!(
            CollectionState::Ready(Vec::new()).templates().map(|t| t.len()),
            Some(0)
        );
    }
}
