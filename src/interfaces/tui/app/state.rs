//! App state definition and basic state management

use ratatui::widgets::TableState;
use tokio::task::JoinHandle;

use crate::interfaces::tui::constants::SPINNER_FRAMES;
use crate::models::Template;
use crate::runtime::lifetime::PanelContext;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    TemplateForm,
    DeleteConfirm,
    Help,
    Exiting,
}

pub struct App {
    pub panel: PanelContext,
    pub current_screen: CurrentScreen,

    // UI state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub table_state: TableState,
    /// Local hint (e.g. nothing selected); gateway outcomes go through notifications
    pub error_message: String,
    pub tick: usize,

    pub(super) tasks: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(panel: PanelContext) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            panel,
            current_screen: CurrentScreen::Main,
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            table_state,
            error_message: String::new(),
            tick: 0,
            tasks: Vec::new(),
        }
    }

    pub fn templates(&self) -> Vec<Template> {
        self.panel.store.templates()
    }

    pub fn display_count(&self) -> usize {
        self.templates().len()
    }

    pub fn get_selected_template(&self) -> Option<Template> {
        self.templates().into_iter().nth(self.selected_index)
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
    }

    pub fn clear_error(&mut self) {
        self.error_message.clear();
    }

    /// Whether a background request is still running
    pub fn is_busy(&self) -> bool {
        self.running_tasks() > 0
    }

    pub fn running_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    /// Periodic housekeeping between two input polls
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.tasks.retain(|task| !task.is_finished());
        self.sync_screen();
        self.clamp_selection();
    }

    /// Abort everything still in flight
    pub fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
        self.panel.notifications.dismiss();
    }
}
