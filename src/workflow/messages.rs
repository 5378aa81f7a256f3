//! User-facing strings

pub const CREATE_SUCCESS: &str = "Template created successfully";
pub const CREATE_ERROR: &str = "Failed to create template. Please try again.";
pub const UPDATE_SUCCESS: &str = "Template updated successfully";
pub const UPDATE_ERROR: &str = "Failed to update template. Please try again.";
pub const DELETE_SUCCESS: &str = "Template deleted successfully";
pub const DELETE_ERROR: &str = "Failed to delete template. Please try again.";
pub const IMPORT_ERROR: &str = "Failed to import the course. Please try again.";

pub const NAME_REQUIRED: &str = "Template name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const TEMPLATE_URL_REQUIRED: &str = "Please provide a course template URL";

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this template?";
pub const CREATE_TEMPLATE_HEADER: &str = "Create New Template";
pub const EDIT_TEMPLATE_HEADER: &str = "Edit Template";
pub const DELETE_TEMPLATE_HEADER: &str = "Delete Template";

pub const FORM_NAME_LABEL: &str = "Template Name";
pub const FORM_DESCRIPTION_LABEL: &str = "Description";
pub const FORM_TEMPLATE_URL_LABEL: &str = "Course Template URL (.gz)";
pub const FORM_THUMBNAIL_LABEL: &str = "Thumbnail Image (optional)";

pub fn page_title(organization: &str) -> String {
    format!("{} Templates List", organization)
}

pub fn empty_list(organization: &str) -> String {
    format!("No templates available for {}", organization)
}

pub fn loading_error(error: &str) -> String {
    format!("Error loading templates: {}", error)
}
