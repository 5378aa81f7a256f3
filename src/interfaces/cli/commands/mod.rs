//! CLI command implementations

mod config_management;
mod template_management;

pub use config_management::*;
pub use template_management::*;
