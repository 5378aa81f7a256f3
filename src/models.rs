//! Template data model and backend record mapping
//!
//! Backend records use different field names than the display model; the
//! conversion lives here as pure functions so it can be tested without a
//! network round-trip.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{Result, TemplateError};

/// One importable course package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub display_name: String,
    pub package_url: String,
    pub metadata: Option<TemplateMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl Template {
    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.title.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.description.as_deref())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.thumbnail_url.as_deref())
    }
}

fn metadata_from(
    title: Option<String>,
    description: Option<String>,
    thumbnail_url: Option<String>,
) -> Option<TemplateMetadata> {
    if title.is_none() && description.is_none() && thumbnail_url.is_none() {
        None
    } else {
        Some(TemplateMetadata {
            title,
            description,
            thumbnail_url,
        })
    }
}

// ============ CRUD backend shape ============

/// Record as returned by the template collection endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub course_template: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// `GET /templates` response body
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<TemplateRecord>,
}

impl TemplateRecord {
    pub fn into_template(self) -> Template {
        Template {
            id: self.id,
            display_name: self.name,
            package_url: self.course_template,
            metadata: metadata_from(
                None,
                self.description.filter(|d| !d.is_empty()),
                self.thumbnail.filter(|t| !t.is_empty()),
            ),
        }
    }
}

pub fn map_records(records: Vec<TemplateRecord>) -> Vec<Template> {
    records
        .into_iter()
        .map(TemplateRecord::into_template)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ============ Public feed shape ============

/// Entry of the public template feed (a bare JSON array, no ids)
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    pub courses_name: String,
    pub zip_url: String,
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Feed entries get their 1-based position as id
pub fn map_feed(records: Vec<FeedRecord>) -> Vec<Template> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let meta = record.metadata.unwrap_or_default();
            Template {
                id: (index + 1).to_string(),
                display_name: record.courses_name,
                package_url: record.zip_url,
                metadata: metadata_from(meta.title, meta.description, meta.thumbnail),
            }
        })
        .collect()
}

// ============ Mutation payload ============

/// Full editable field set sent on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFields {
    pub name: String,
    pub description: String,
    pub package_url: String,
    pub thumbnail: Option<Thumbnail>,
}

impl TemplateFields {
    /// Pre-populate from an existing template (no thumbnail binary)
    pub fn from_template(template: &Template) -> Self {
        Self {
            name: template.display_name.clone(),
            description: template.description().unwrap_or_default().to_string(),
            package_url: template.package_url.clone(),
            thumbnail: None,
        }
    }
}

/// Thumbnail image attached to a create/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Thumbnail {
    /// Read an image from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            TemplateError::unexpected(format!(
                "Failed to read thumbnail {}: {}",
                path.display(),
                e
            ))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("thumbnail")
            .to_string();
        Ok(Self {
            mime: mime_for(&file_name).to_string(),
            file_name,
            bytes,
        })
    }

    /// `data:` URL used as an inline preview
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Result of the import action, depending on gateway mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Server ingested the archive; navigate to this location
    Navigate(String),
    /// Archive was saved locally
    Downloaded(PathBuf),
}
