//! Types for the Salesforce query and Tooling API wire shapes used here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Query Envelope
// ============================================================================

/// Result of a SOQL query (data or Tooling API).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    #[serde(default)]
    pub done: bool,

    /// URL to fetch the next batch of results.
    #[serde(rename = "nextRecordsUrl")]
    pub next_records_url: Option<String>,

    /// The records.
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

// ============================================================================
// Read Records
// ============================================================================

/// User record, as returned by the user-resolution query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRecord {
    #[serde(rename = "Id")]
    pub id: String,
}

/// TraceFlag record from the Tooling API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceFlagRecord {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "LogType")]
    pub log_type: Option<String>,

    #[serde(rename = "StartDate")]
    pub start_date: Option<String>,

    #[serde(rename = "ExpirationDate")]
    pub expiration_date: Option<String>,

    #[serde(rename = "DebugLevelId")]
    pub debug_level_id: String,

    /// Joined DebugLevel fields. Fetched for inspection; not consumed by the
    /// manager itself.
    #[serde(rename = "DebugLevel")]
    pub debug_level: Option<DebugLevelRef>,
}

/// Joined DebugLevel fields on a TraceFlag query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DebugLevelRef {
    #[serde(rename = "ApexCode")]
    pub apex_code: Option<String>,

    #[serde(rename = "Visualforce")]
    pub visualforce: Option<String>,
}

// ============================================================================
// Write Bodies
// ============================================================================

/// Body for creating a DebugLevel.
#[derive(Debug, Clone, Serialize)]
pub struct NewDebugLevel {
    #[serde(rename = "DeveloperName")]
    pub developer_name: String,

    #[serde(rename = "MasterLabel")]
    pub master_label: String,

    #[serde(rename = "ApexCode")]
    pub apex_code: String,

    #[serde(rename = "Visualforce")]
    pub visualforce: String,
}

/// Body for re-asserting verbosity on an existing DebugLevel.
#[derive(Debug, Clone, Serialize)]
pub struct DebugLevelUpdate {
    #[serde(rename = "ApexCode")]
    pub apex_code: String,

    #[serde(rename = "Visualforce")]
    pub visualforce: String,
}

/// Body for creating a TraceFlag.
#[derive(Debug, Clone, Serialize)]
pub struct NewTraceFlag {
    #[serde(rename = "TracedEntityId")]
    pub traced_entity_id: String,

    #[serde(rename = "LogType")]
    pub log_type: String,

    #[serde(rename = "DebugLevelId")]
    pub debug_level_id: String,

    #[serde(rename = "StartDate")]
    pub start_date: DateTime<Utc>,

    #[serde(rename = "ExpirationDate")]
    pub expiration_date: DateTime<Utc>,
}

/// Body for refreshing an existing TraceFlag's window.
#[derive(Debug, Clone, Serialize)]
pub struct TraceFlagUpdate {
    #[serde(rename = "StartDate")]
    pub start_date: DateTime<Utc>,

    #[serde(rename = "ExpirationDate")]
    pub expiration_date: DateTime<Utc>,
}

// ============================================================================
// Save Envelope
// ============================================================================

/// Result of a Tooling API create or update.
///
/// `success: false` is a soft failure: the org rejected the save but the
/// request itself completed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveResult {
    pub success: bool,

    pub id: Option<String>,

    #[serde(default)]
    pub errors: Vec<SaveError>,
}

impl SaveResult {
    /// A successful save of the given record ID.
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
            errors: Vec::new(),
        }
    }

    /// A rejected save.
    pub fn rejected(errors: Vec<SaveError>) -> Self {
        Self {
            success: false,
            id: None,
            errors,
        }
    }
}

/// One error entry from a rejected save.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveError {
    pub message: String,

    #[serde(rename = "errorCode", alias = "statusCode")]
    pub error_code: Option<String>,

    #[serde(default)]
    pub fields: Vec<String>,
}
