//! HTTP group directory backed by the identity service REST API.

use crate::subscription::{
    domain::GroupName,
    ports::{GroupDirectory, GroupDirectoryError, GroupDirectoryResult},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/ligoj/rest/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings of [`HttpGroupDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDirectoryConfig {
    base_url: String,
    timeout: Duration,
}

impl HttpDirectoryConfig {
    /// Creates settings for the REST API rooted at `base_url`.
    ///
    /// A trailing `/` is appended when missing.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the REST base URL, ending with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpDirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Returns the path, relative to the REST base, of the existence check of
/// `name`.
///
/// # Examples
///
/// ```
/// use sqlid_form::subscription::adapters::http::exists_path;
/// use sqlid_form::subscription::domain::GroupName;
///
/// let path = exists_path(&GroupName::new("proj1-ou1-web"));
/// assert_eq!(path, "service/id/group/proj1-ou1-web/exists");
/// ```
#[must_use]
pub fn exists_path(name: &GroupName) -> String {
    format!(
        "service/id/group/{}/exists",
        urlencoding::encode(name.as_str())
    )
}

/// Interprets an existence payload the way the form widgets do: `null`,
/// `false`, `0` and `""` mean absent, anything else means present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the path, relative to the REST base, of the lookup of `name`.
#[must_use]
pub fn group_path(name: &GroupName) -> String {
    format!("service/id/group/{}", urlencoding::encode(name.as_str()))
}

/// Group as returned by the lookup endpoint; only the scope is read.
#[derive(Debug, Deserialize)]
struct GroupPayload {
    scope: String,
}

/// Group directory querying `service/id/group/{name}/exists` and
/// `service/id/group/{name}`.
#[derive(Debug, Clone)]
pub struct HttpGroupDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGroupDirectory {
    /// Creates a directory client.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDirectoryError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(config: &HttpDirectoryConfig) -> GroupDirectoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(GroupDirectoryError::transport)?;
        Ok(Self {
            base_url: config.base_url().to_owned(),
            client,
        })
    }

    /// Returns the absolute URL of the existence check of `name`.
    #[must_use]
    pub fn exists_url(&self, name: &GroupName) -> String {
        format!("{}{}", self.base_url, exists_path(name))
    }

    /// Returns the absolute URL of the lookup of `name`.
    #[must_use]
    pub fn group_url(&self, name: &GroupName) -> String {
        format!("{}{}", self.base_url, group_path(name))
    }

    async fn get(&self, url: String) -> GroupDirectoryResult<reqwest::Response> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(GroupDirectoryError::transport)
    }
}

async fn unexpected_status(response: reqwest::Response) -> GroupDirectoryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    GroupDirectoryError::UnexpectedStatus { status, body }
}

#[async_trait]
impl GroupDirectory for HttpGroupDirectory {
    #[instrument(skip(self), fields(group = %name), err)]
    async fn exists(&self, name: &GroupName) -> GroupDirectoryResult<bool> {
        let response = self.get(self.exists_url(name)).await?;
        if !response.status().is_success() {
            return Err(unexpected_status(response).await);
        }

        // An empty body is a decode error, not an absent group.
        let bytes = response
            .bytes()
            .await
            .map_err(GroupDirectoryError::transport)?;
        let payload: Value = serde_json::from_slice(&bytes).map_err(GroupDirectoryError::decode)?;
        Ok(is_truthy(&payload))
    }

    #[instrument(skip(self), fields(group = %name), err)]
    async fn scope(&self, name: &GroupName) -> GroupDirectoryResult<Option<String>> {
        let response = self.get(self.group_url(name)).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(unexpected_status(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(GroupDirectoryError::transport)?;
        let payload: GroupPayload =
            serde_json::from_slice(&bytes).map_err(GroupDirectoryError::decode)?;
        Ok(Some(payload.scope))
    }
}
