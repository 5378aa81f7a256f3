//! Startup wiring shared by every mode

pub mod startup;

pub use startup::{PanelContext, load_environment, prepare_panel};
