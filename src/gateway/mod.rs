//! Remote template gateway
//!
//! Boundary between panel intents and the backend template collection.
//!
//! # Modes
//!
//! ```text
//! crud: GET/POST/PUT/DELETE on the collection endpoint, import = local download
//! feed: GET on a public JSON feed,                     import = server-side ingest
//! ```
//!
//! Exactly one mode is wired per deployment (see [`build_gateway`]).
//! Every request is attempted once; retry policy belongs to the caller.

mod crud;
mod feed;

pub use crud::CrudApiGateway;
pub use feed::FeedGateway;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use tracing::{debug, warn};
use url::Url;

use crate::config::{ApiConfig, GatewayMode, StaticConfig};
use crate::errors::{Result, TemplateError};
use crate::models::{ImportOutcome, Template, TemplateFields};

/// Upper bound on how much of an error body is kept
const MAX_ERROR_BODY_LEN: usize = 512;

#[async_trait]
pub trait TemplateGateway: Send + Sync {
    /// Read the whole collection
    async fn list(&self) -> Result<Vec<Template>>;

    async fn create(&self, fields: &TemplateFields) -> Result<Template>;

    /// Full replace of the editable fields of `id`
    async fn update(&self, id: &str, fields: &TemplateFields) -> Result<Template>;

    async fn remove(&self, id: &str) -> Result<()>;

    async fn trigger_import(&self, id: &str, package_url: &str) -> Result<ImportOutcome>;

    fn name(&self) -> &'static str;
}

/// Build the gateway selected by `gateway.mode`
pub fn build_gateway(config: &StaticConfig) -> Result<Arc<dyn TemplateGateway>> {
    config.validate()?;
    let gateway: Arc<dyn TemplateGateway> = match config.gateway.mode {
        GatewayMode::Crud => Arc::new(CrudApiGateway::new(&config.api, &config.gateway)?),
        GatewayMode::Feed => Arc::new(FeedGateway::new(&config.api, &config.gateway)?),
    };
    debug!("Using template gateway: {}", gateway.name());
    Ok(gateway)
}

/// Credentialed client carrying the anti-forgery header on every request
pub(crate) fn build_client(api: &ApiConfig) -> Result<reqwest::Client> {
    let base = Url::parse(&api.base_url)?;

    let mut headers = HeaderMap::new();
    if !api.csrf_token.is_empty() {
        let name = HeaderName::from_bytes(api.csrf_header.as_bytes())
            .map_err(|e| TemplateError::config(format!("api.csrf_header: {}", e)))?;
        let value = HeaderValue::from_str(&api.csrf_token)
            .map_err(|e| TemplateError::config(format!("api.csrf_token: {}", e)))?;
        headers.insert(name, value);
    }
    // Django-style CSRF checks also compare the referer on HTTPS
    if let Ok(referer) = HeaderValue::from_str(base.as_str()) {
        headers.insert(REFERER, referer);
    }

    let jar = Arc::new(reqwest::cookie::Jar::default());
    if let Some(cookie) = api.session_cookie.as_deref().filter(|c| !c.is_empty()) {
        jar.add_cookie_str(cookie, &base);
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .cookie_provider(jar)
        .timeout(Duration::from_secs(api.timeout_secs))
        .build()?;
    Ok(client)
}

/// Join a configured path onto the base URL
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    Ok(Url::parse(base_url)?.join(path)?)
}

/// `{collection}/{id}`, keeping the collection's trailing-slash convention
pub(crate) fn item_url(collection: &Url, id: &str) -> Result<Url> {
    let trailing = collection.path().ends_with('/');
    let mut url = collection.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| TemplateError::config(format!("cannot append to {}", collection)))?;
        segments.pop_if_empty().push(id);
        if trailing {
            segments.push("");
        }
    }
    Ok(url)
}

/// Turn a non-2xx response into `TemplateError::Http`
pub(crate) async fn check_response(
    response: reqwest::Response,
    action: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let mut body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("{} failed with HTTP {}, body unreadable: {}", action, status.as_u16(), e);
            String::new()
        }
    };
    if body.len() > MAX_ERROR_BODY_LEN {
        let mut cut = MAX_ERROR_BODY_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    warn!("{} failed with HTTP {}", action, status.as_u16());
    Err(TemplateError::http(status.as_u16(), body))
}

/// Map a send failure, logging it first
pub(crate) fn send_error(action: &str, err: reqwest::Error) -> TemplateError {
    warn!("{} request failed: {}", action, err);
    TemplateError::from(err)
}
