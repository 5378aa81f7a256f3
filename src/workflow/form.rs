//! Template form state
//!
//! Field input, required-field checks and the inline error of the create/edit form.

use std::collections::HashMap;

use crate::errors::{Result, TemplateError};
use crate::models::{Template, TemplateFields, Thumbnail};

use super::messages;

/// Field with the input cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    PackageUrl,
    Thumbnail,
}

impl FormField {
    /// Tab order
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::Description,
        Self::PackageUrl,
        Self::Thumbnail,
    ];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// Multipart field name on the backend
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::PackageUrl => "course_template",
            Self::Thumbnail => "thumbnail",
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Name => messages::FORM_NAME_LABEL,
            Self::Description => messages::FORM_DESCRIPTION_LABEL,
            Self::PackageUrl => messages::FORM_TEMPLATE_URL_LABEL,
            Self::Thumbnail => messages::FORM_THUMBNAIL_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => messages::CREATE_TEMPLATE_HEADER,
            FormMode::Edit { .. } => messages::EDIT_TEMPLATE_HEADER,
        }
    }
}

/// Create/edit form
#[derive(Debug, Clone)]
pub struct TemplateForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub package_url: String,
    /// Path typed by the user, read on submit
    pub thumbnail_path: String,
    pub thumbnail: Option<Thumbnail>,
    /// `data:` URL of a loaded file, or the current remote thumbnail
    pub thumbnail_preview: Option<String>,
    /// field_name -> message
    pub validation_errors: HashMap<String, String>,
    pub currently_editing: Option<FormField>,
    /// Inline error of the last failed submit
    pub error: Option<String>,
    pub submitting: bool,
}

impl TemplateForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            description: String::new(),
            package_url: String::new(),
            thumbnail_path: String::new(),
            thumbnail: None,
            thumbnail_preview: None,
            validation_errors: HashMap::new(),
            currently_editing: Some(FormField::Name),
            error: None,
            submitting: false,
        }
    }

    /// Edit form pre-filled from `template`
    pub fn edit(template: &Template) -> Self {
        let fields = TemplateFields::from_template(template);
        Self {
            mode: FormMode::Edit {
                id: template.id.clone(),
            },
            name: fields.name,
            description: fields.description,
            package_url: fields.package_url,
            thumbnail_preview: template.thumbnail_url().map(str::to_string),
            ..Self::create()
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Clear every input, keeping the mode
    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
        self.package_url.clear();
        self.thumbnail_path.clear();
        self.thumbnail = None;
        self.thumbnail_preview = None;
        self.validation_errors.clear();
        self.error = None;
        self.currently_editing = Some(FormField::Name);
    }

    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => FormField::default(),
        });
    }

    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::PackageUrl => &self.package_url,
            FormField::Thumbnail => &self.thumbnail_path,
        }
    }

    /// Input buffer of the focused field
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(FormField::Name) => Some(&mut self.name),
            Some(FormField::Description) => Some(&mut self.description),
            Some(FormField::PackageUrl) => Some(&mut self.package_url),
            Some(FormField::Thumbnail) => Some(&mut self.thumbnail_path),
            None => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    /// Attach a loaded thumbnail and switch the preview to it
    pub fn set_thumbnail(&mut self, thumbnail: Thumbnail) {
        self.thumbnail_preview = Some(thumbnail.preview_data_url());
        self.thumbnail = Some(thumbnail);
    }

    pub fn get_error(&self, field: FormField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// Required-field checks; returns the full field set on success
    ///
    /// Whitespace-only input counts as empty. The returned error carries the
    /// first failing field's message.
    pub fn validate(&mut self) -> Result<TemplateFields> {
        self.validation_errors.clear();

        let checks = [
            (FormField::Name, &self.name, messages::NAME_REQUIRED),
            (
                FormField::Description,
                &self.description,
                messages::DESCRIPTION_REQUIRED,
            ),
            (
                FormField::PackageUrl,
                &self.package_url,
                messages::TEMPLATE_URL_REQUIRED,
            ),
        ];
        let mut first = None;
        let mut errors = HashMap::new();
        for (field, value, message) in checks {
            if value.trim().is_empty() {
                errors.insert(field.field_name().to_string(), message.to_string());
                first.get_or_insert(message);
            }
        }
        self.validation_errors = errors;

        if let Some(message) = first {
            return Err(TemplateError::validation(message));
        }

        Ok(TemplateFields {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            package_url: self.package_url.trim().to_string(),
            thumbnail: self.thumbnail.clone(),
        })
    }
}
