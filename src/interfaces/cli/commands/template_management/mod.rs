//! Template management commands

mod create;
mod delete;
mod helpers;
mod import;
mod list;
mod update;

pub use create::create_template;
pub use delete::delete_template;
pub use import::import_template;
pub use list::list_templates;
pub use update::update_template;
