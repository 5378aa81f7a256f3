//! Public JSON feed gateway
//!
//! The feed is read-only. Imports ask the backend to ingest the archive and
//! return the course location to navigate to.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use super::{TemplateGateway, build_client, check_response, endpoint, item_url, send_error};
use crate::config::{ApiConfig, GatewayConfig};
use crate::errors::{Result, TemplateError};
use crate::models::{FeedRecord, ImportOutcome, Template, TemplateFields, map_feed};

const READ_ONLY: &str = "The template feed is read-only";

#[derive(Serialize)]
struct ImportRequest<'a> {
    file_url: &'a str,
}

pub struct FeedGateway {
    client: reqwest::Client,
    feed_url: Url,
    import_base: Url,
    course_url_template: String,
}

impl FeedGateway {
    pub fn new(api: &ApiConfig, gateway: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(api)?,
            feed_url: Url::parse(&gateway.feed_url)?,
            import_base: endpoint(&api.base_url, &api.import_path)?,
            course_url_template: gateway.course_url_template.clone(),
        })
    }

    /// Where the panel should go once `id` has been ingested
    pub fn course_location(&self, id: &str) -> String {
        self.course_url_template.replace("{id}", id)
    }
}

#[async_trait]
impl TemplateGateway for FeedGateway {
    async fn list(&self) -> Result<Vec<Template>> {
        debug!("GET {}", self.feed_url);
        let response = self
            .client
            .get(self.feed_url.clone())
            .send()
            .await
            .map_err(|e| send_error("list", e))?;
        let response = check_response(response, "list").await?;
        let records: Vec<FeedRecord> = response.json().await?;
        Ok(map_feed(records))
    }

    async fn create(&self, _fields: &TemplateFields) -> Result<Template> {
        Err(TemplateError::unsupported(READ_ONLY))
    }

    async fn update(&self, _id: &str, _fields: &TemplateFields) -> Result<Template> {
        Err(TemplateError::unsupported(READ_ONLY))
    }

    async fn remove(&self, _id: &str) -> Result<()> {
        Err(TemplateError::unsupported(READ_ONLY))
    }

    async fn trigger_import(&self, id: &str, package_url: &str) -> Result<ImportOutcome> {
        let url = item_url(&self.import_base, id)?;
        debug!("POST {} file_url={}", url, package_url);
        let response = self
            .client
            .post(url)
            .json(&ImportRequest {
                file_url: package_url,
            })
            .send()
            .await
            .map_err(|e| send_error("import", e))?;
        let response = check_response(response, "import").await?;
        // Body content is not used, but it must be valid JSON
        let _: serde_json::Value = response.json().await?;

        info!("Template {} imported", id);
        Ok(ImportOutcome::Navigate(self.course_location(id)))
    }

    fn name(&self) -> &'static str {
        "feed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mutations_are_unsupported() {
        let gateway = FeedGateway::new(&ApiConfig::default(), &GatewayConfig::default()).unwrap();
        let fields = TemplateFields::default();
        assert!(matches!(
            gateway.create(&fields).await,
            Err(TemplateError::Unsupported(_))
        ));
        assert!(matches!(
            gateway.update("1", &fields).await,
            Err(TemplateError::Unsupported(_))
        ));
        assert!(matches!(
            gateway.remove("1").await,
            Err(TemplateError::Unsupported(_))
        ));
    }

    #[test]
    fn test_course_location() {
        let gateway = FeedGateway::new(&ApiConfig::default(), &GatewayConfig::default()).unwrap();
        assert_eq!(gateway.course_location("4"), "/course/4");
    }
}
