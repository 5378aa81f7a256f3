//! Transient user-facing status messages
//!
//! One notification is visible at a time. Every `show` replaces the current
//! message and restarts the auto-dismiss timer; the previous timer is
//! aborted, never stacked.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use strum::AsRefStr;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::config::PanelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Danger,
    #[default]
    #[strum(serialize = "")]
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub variant: NotificationVariant,
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

pub struct NotificationChannel {
    slot: Arc<Mutex<Slot>>,
    timeout: Duration,
}

impl NotificationChannel {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timeout,
        }
    }

    pub fn from_config(panel: &PanelConfig) -> Self {
        Self::new(Duration::from_secs(panel.notification_timeout_secs))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace the visible notification and restart the dismiss timer
    pub fn show(&self, message: impl Into<String>, variant: NotificationVariant) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        let generation = slot.generation;
        slot.current = Some(Notification {
            message: message.into(),
            variant,
        });

        if let Some(previous) = slot.timer.take() {
            previous.abort();
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let weak = Arc::downgrade(&self.slot);
                let timeout = self.timeout;
                slot.timer = Some(handle.spawn(dismiss_after(weak, generation, timeout)));
            }
            Err(_) => trace!("No runtime, notification stays until replaced"),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationVariant::Success);
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.show(message, NotificationVariant::Danger);
    }

    /// Currently visible notification, if any
    pub fn current(&self) -> Option<Notification> {
        self.slot.lock().current.clone()
    }

    pub fn dismiss(&self) {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.current = None;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
    }
}

async fn dismiss_after(slot: Weak<Mutex<Slot>>, generation: u64, timeout: Duration) {
    tokio::time::sleep(timeout).await;
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let mut slot = slot.lock();
    // A newer show() owns the slot now
    if slot.generation == generation {
        slot.current = None;
        slot.timer = None;
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        if let Some(timer) = self.slot.lock().timer.take() {
            timer.abort();
        }
    }
}
