//! HTTP-backed [`OrgConnection`] over the Salesforce REST and Tooling APIs.
//!
//! ## Security
//!
//! The access token is redacted in Debug output and record IDs are validated
//! before being interpolated into URL paths.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::connection::OrgConnection;
use crate::error::{Error, ErrorKind, Result};
use crate::security;
use crate::types::{QueryResult, SaveError, SaveResult};
use crate::DEFAULT_API_VERSION;

/// Org connection backed by a reqwest client.
///
/// Holds an instance URL and bearer access token obtained by the surrounding
/// tool's auth flow. No retry and no pooling beyond reqwest's own connection
/// reuse.
///
/// # Example
///
/// ```rust,ignore
/// use sf_trace_flags::HttpOrgConnection;
///
/// let connection = HttpOrgConnection::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?
/// .with_username("admin@myorg.example.com");
/// ```
#[derive(Clone)]
pub struct HttpOrgConnection {
    http: reqwest::Client,
    instance_url: String,
    access_token: String,
    api_version: String,
    username: Option<String>,
}

impl std::fmt::Debug for HttpOrgConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOrgConnection")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl HttpOrgConnection {
    /// Create a new connection with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            username: None,
        })
    }

    /// Set the default username reported by [`OrgConnection::username`].
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the data API query URL for a SOQL string.
    fn query_url(&self, soql: &str) -> String {
        format!(
            "{}/services/data/v{}/query?q={}",
            self.instance_url,
            self.api_version,
            urlencoding::encode(soql)
        )
    }

    /// Build the Tooling API query URL for a SOQL string.
    fn tooling_query_url(&self, soql: &str) -> String {
        format!(
            "{}/services/data/v{}/tooling/query?q={}",
            self.instance_url,
            self.api_version,
            urlencoding::encode(soql)
        )
    }

    /// Build the Tooling API URL for a path.
    fn tooling_url(&self, path: &str) -> String {
        format!(
            "{}/services/data/v{}/tooling/{}",
            self.instance_url, self.api_version, path
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }));
        }
        Ok(response.json().await?)
    }

    /// Decode a rejected save (HTTP 400) into a soft-failure `SaveResult`.
    async fn rejected_save(response: reqwest::Response) -> SaveResult {
        let errors: Vec<SaveError> = response.json().await.unwrap_or_default();
        SaveResult::rejected(errors)
    }
}

impl OrgConnection for HttpOrgConnection {
    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    #[instrument(skip(self))]
    async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        self.get_json(&self.query_url(soql)).await
    }

    #[instrument(skip(self))]
    async fn tooling_query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        self.get_json(&self.tooling_query_url(soql)).await
    }

    #[instrument(skip(self, record))]
    async fn tooling_create<T: Serialize + Sync>(
        &self,
        sobject: &str,
        record: &T,
    ) -> Result<SaveResult> {
        let url = self.tooling_url(&format!("sobjects/{}", sobject));
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else if status.as_u16() == 400 {
            Ok(Self::rejected_save(response).await)
        } else {
            Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }))
        }
    }

    #[instrument(skip(self, record))]
    async fn tooling_update<T: Serialize + Sync>(
        &self,
        sobject: &str,
        id: &str,
        record: &T,
    ) -> Result<SaveResult> {
        if !security::is_valid_salesforce_id(id) {
            return Err(Error::new(ErrorKind::Invalid {
                what: "Salesforce ID",
                value: id.to_string(),
            }));
        }
        let url = self.tooling_url(&format!("sobjects/{}/{}", sobject, id));
        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.access_token)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        // Update returns 204 No Content on success
        if status.is_success() {
            Ok(SaveResult::ok(id))
        } else if status.as_u16() == 400 {
            Ok(Self::rejected_save(response).await)
        } else {
            Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }))
        }
    }
}
