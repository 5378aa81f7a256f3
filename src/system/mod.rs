//! System-level modules
//!
//! - Logging setup
//! - Panic handling per execution mode

pub mod logging;
pub mod panic_handler;
