//! template-desk - admin console for course templates
//!
//! Lists, creates, edits, deletes and imports course templates held by a
//! remote template API, either from one-shot commands or an interactive
//! terminal panel.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal admin panel
//! - **full**: All features enabled
//!
//! # Architecture
//! - `gateway`: HTTP access to the template backend (CRUD API or read-only feed)
//! - `store`: In-memory template collection with load state
//! - `workflow`: Create / edit / delete / import flows and the template form
//! - `notification`: Single auto-dismissing status message
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod interfaces;
pub mod models;
pub mod notification;
pub mod runtime;
pub mod store;
pub mod system;
pub mod workflow;
