//! TUI application state and operations

mod navigation;
mod state;
mod template_operations;

pub use state::{App, CurrentScreen};
