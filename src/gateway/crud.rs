//! Authenticated CRUD API gateway
//!
//! Imports are performed as a client-side download of the package archive.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use url::Url;

use super::{TemplateGateway, build_client, check_response, endpoint, item_url, send_error};
use crate::config::{ApiConfig, GatewayConfig};
use crate::errors::{Result, TemplateError};
use crate::models::{ImportOutcome, ListResponse, Template, TemplateFields, TemplateRecord, map_records};

pub struct CrudApiGateway {
    client: reqwest::Client,
    collection: Url,
    download_dir: PathBuf,
}

impl CrudApiGateway {
    pub fn new(api: &ApiConfig, gateway: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(api)?,
            collection: endpoint(&api.base_url, &api.templates_path)?,
            download_dir: PathBuf::from(&gateway.download_dir),
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn multipart(fields: &TemplateFields) -> Result<Form> {
        let mut form = Form::new()
            .text("name", fields.name.clone())
            .text("description", fields.description.clone())
            .text("course_template", fields.package_url.clone());
        if let Some(thumbnail) = &fields.thumbnail {
            let part = Part::bytes(thumbnail.bytes.clone())
                .file_name(thumbnail.file_name.clone())
                .mime_str(&thumbnail.mime)?;
            form = form.part("thumbnail", part);
        }
        Ok(form)
    }

    async fn submit(&self, request: reqwest::RequestBuilder, action: &str) -> Result<Template> {
        let response = request.send().await.map_err(|e| send_error(action, e))?;
        let response = check_response(response, action).await?;
        let record: TemplateRecord = response.json().await?;
        Ok(record.into_template())
    }

    /// Stream `package_url` into `target`, going through a `.part` file
    async fn download_to(&self, package_url: &str, target: &Path) -> Result<u64> {
        let response = self
            .client
            .get(package_url)
            .send()
            .await
            .map_err(|e| send_error("download", e))?;
        let response = check_response(response, "download").await?;

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let partial = partial_path(target);
        match write_archive(response, &partial, target).await {
            Ok(written) => Ok(written),
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await
                    && cleanup.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to remove {}: {}", partial.display(), cleanup);
                }
                Err(e)
            }
        }
    }
}

/// `<target>.part`, keeping every extension of the target name
fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

async fn write_archive(response: reqwest::Response, partial: &Path, target: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(partial).await?;
    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| send_error("download", e))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    drop(file);

    tokio::fs::rename(partial, target).await?;
    Ok(written)
}

/// File name for a downloaded archive: last URL path segment, or a name derived from the id
pub fn archive_file_name(id: &str, package_url: &str) -> String {
    Url::parse(package_url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| format!("template-{}.tar.gz", id))
}

#[async_trait]
impl TemplateGateway for CrudApiGateway {
    async fn list(&self) -> Result<Vec<Template>> {
        debug!("GET {}", self.collection);
        let response = self
            .client
            .get(self.collection.clone())
            .send()
            .await
            .map_err(|e| send_error("list", e))?;
        let response = check_response(response, "list").await?;
        let body: ListResponse = response.json().await?;
        Ok(map_records(body.results))
    }

    async fn create(&self, fields: &TemplateFields) -> Result<Template> {
        debug!("POST {} name={}", self.collection, fields.name);
        let request = self
            .client
            .post(self.collection.clone())
            .multipart(Self::multipart(fields)?);
        self.submit(request, "create").await
    }

    async fn update(&self, id: &str, fields: &TemplateFields) -> Result<Template> {
        let url = item_url(&self.collection, id)?;
        debug!("PUT {} name={}", url, fields.name);
        let request = self.client.put(url).multipart(Self::multipart(fields)?);
        self.submit(request, "update").await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = item_url(&self.collection, id)?;
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| send_error("delete", e))?;
        check_response(response, "delete").await?;
        Ok(())
    }

    async fn trigger_import(&self, id: &str, package_url: &str) -> Result<ImportOutcome> {
        if package_url.trim().is_empty() {
            return Err(TemplateError::validation(format!(
                "Template {} has no package URL",
                id
            )));
        }
        let target = self.download_dir.join(archive_file_name(id, package_url));
        debug!("Downloading {} to {}", package_url, target.display());

        match self.download_to(package_url, &target).await {
            Ok(bytes) => {
                info!("Downloaded template {} ({} bytes)", id, bytes);
                Ok(ImportOutcome::Downloaded(target))
            }
            Err(e) => {
                warn!("Download of template {} failed: {}", id, e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        "crud-api"
    }
}
