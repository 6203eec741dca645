//! The org connection capability consumed by the trace flag manager.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::types::{QueryResult, SaveResult};

/// Connection to a Salesforce org.
///
/// The manager only needs the default username, SOQL queries against the data
/// and Tooling APIs, and Tooling API create/update. [`HttpOrgConnection`]
/// implements this over REST; tests substitute a scripted double.
///
/// Saves rejected by the org surface as `SaveResult { success: false, .. }`,
/// not as `Err`. `Err` is reserved for transport and protocol faults.
///
/// [`HttpOrgConnection`]: crate::HttpOrgConnection
#[allow(async_fn_in_trait)]
pub trait OrgConnection {
    /// The default username configured for this connection, if any.
    fn username(&self) -> Option<String>;

    /// Execute a SOQL query against the data API.
    async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>>;

    /// Execute a SOQL query against the Tooling API.
    async fn tooling_query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>>;

    /// Create a Tooling API SObject.
    async fn tooling_create<T: Serialize + Sync>(
        &self,
        sobject: &str,
        record: &T,
    ) -> Result<SaveResult>;

    /// Update a Tooling API SObject by ID.
    async fn tooling_update<T: Serialize + Sync>(
        &self,
        sobject: &str,
        id: &str,
        record: &T,
    ) -> Result<SaveResult>;
}
