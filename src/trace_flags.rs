//! Trace flag management.
//!
//! Ensures the org's default user has an active developer-log trace flag,
//! creating or refreshing the backing DebugLevel and TraceFlag records.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use crate::connection::OrgConnection;
use crate::error::{Error, ErrorKind, Result};
use crate::messages::{localize, Label};
use crate::security;
use crate::types::{
    DebugLevelUpdate, NewDebugLevel, NewTraceFlag, QueryResult, TraceFlagRecord, TraceFlagUpdate,
    UserRecord,
};

/// How long a managed trace flag stays active, in minutes.
pub const LOG_TIMER_LENGTH_MINUTES: i64 = 30;

const LOG_TYPE_DEVELOPER: &str = "DEVELOPER_LOG";
const APEX_CODE_LEVEL: &str = "FINEST";
const VISUALFORCE_LEVEL: &str = "FINER";

/// Manages the debug-log trace flag for the connection's default user.
///
/// All state lives in the org; this type only holds the connection. Calls run
/// strictly sequentially, each step gated on the previous one, with no retry
/// and no rollback of earlier writes when a later step fails.
///
/// # Example
///
/// ```rust,ignore
/// use sf_trace_flags::{HttpOrgConnection, TraceFlags};
///
/// let connection = HttpOrgConnection::new(instance_url, access_token)?
///     .with_username("admin@myorg.example.com");
/// let manager = TraceFlags::new(connection);
///
/// if manager.ensure_trace_flags().await? {
///     println!("debug logging is active");
/// }
/// ```
#[derive(Debug)]
pub struct TraceFlags<C> {
    connection: C,
}

impl<C: OrgConnection> TraceFlags<C> {
    /// Create a manager over the given org connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Consume the manager and return the underlying connection.
    pub fn into_inner(self) -> C {
        self.connection
    }

    /// Ensure the default user has an active developer-log trace flag.
    ///
    /// Returns `Ok(true)` when an active flag now exists, `Ok(false)` when the
    /// org rejected a save, and `Err` for missing username, unresolvable user,
    /// failed DebugLevel creation, or transport faults.
    #[instrument(skip(self))]
    pub async fn ensure_trace_flags(&self) -> Result<bool> {
        let username = self.connection.username().ok_or_else(|| {
            Error::new(ErrorKind::Configuration(
                localize(Label::NoDefaultUsername).to_string(),
            ))
        })?;
        let user_id = self.user_id_or_err(&username).await?;

        if let Some(flag) = self.trace_flag_for_user(&user_id).await? {
            // Refresh the existing flag's level and window.
            if !self.update_debug_level(&flag.debug_level_id).await? {
                return Ok(false);
            }
            let current = flag
                .expiration_date
                .as_deref()
                .and_then(parse_salesforce_datetime)
                .unwrap_or_else(Utc::now);
            let expiration_date = calculate_expiration_date(current, Utc::now());
            self.update_trace_flag(&flag.id, expiration_date).await
        } else {
            let debug_level_id = self.create_debug_level().await?.ok_or_else(|| {
                Error::new(ErrorKind::DebugLevel(
                    localize(Label::FailedToCreateDebugLevel).to_string(),
                ))
            })?;
            let expiration_date = calculate_expiration_date(Utc::now(), Utc::now());
            self.create_trace_flag(&user_id, &debug_level_id, expiration_date)
                .await
        }
    }

    async fn user_id_or_err(&self, username: &str) -> Result<String> {
        let soql = format!(
            "SELECT Id FROM User WHERE Username = '{}'",
            security::escape_soql_string(username)
        );
        let mut result: QueryResult<UserRecord> = self.connection.query(&soql).await?;
        if result.total_size == 0 || result.records.is_empty() {
            return Err(Error::new(ErrorKind::UnknownUser(
                localize(Label::UnknownUser).to_string(),
            )));
        }
        Ok(result.records.remove(0).id)
    }

    /// First developer-log trace flag already tracing the user, if any.
    /// Duplicates are not reconciled.
    async fn trace_flag_for_user(&self, user_id: &str) -> Result<Option<TraceFlagRecord>> {
        let soql = format!(
            "SELECT Id, LogType, StartDate, ExpirationDate, DebugLevelId, \
             DebugLevel.ApexCode, DebugLevel.Visualforce \
             FROM TraceFlag WHERE LogType = '{}' AND TracedEntityId = '{}'",
            LOG_TYPE_DEVELOPER,
            security::escape_soql_string(user_id)
        );
        let mut result: QueryResult<TraceFlagRecord> =
            self.connection.tooling_query(&soql).await?;
        if result.total_size > 0 && !result.records.is_empty() {
            Ok(Some(result.records.remove(0)))
        } else {
            Ok(None)
        }
    }

    /// Re-assert FINEST/FINER on the linked debug level. Idempotent.
    #[instrument(skip(self))]
    async fn update_debug_level(&self, id: &str) -> Result<bool> {
        let body = DebugLevelUpdate {
            apex_code: APEX_CODE_LEVEL.to_string(),
            visualforce: VISUALFORCE_LEVEL.to_string(),
        };
        let result = self.connection.tooling_update("DebugLevel", id, &body).await?;
        Ok(result.success)
    }

    /// Create a fresh debug level with a timestamped developer name.
    /// Returns `None` when the org rejected the save.
    #[instrument(skip(self))]
    async fn create_debug_level(&self) -> Result<Option<String>> {
        let developer_name = format!("ReplayDebuggerLevels{}", Utc::now().timestamp_millis());
        debug!(%developer_name, "creating debug level");
        let body = NewDebugLevel {
            developer_name: developer_name.clone(),
            master_label: developer_name,
            apex_code: APEX_CODE_LEVEL.to_string(),
            visualforce: VISUALFORCE_LEVEL.to_string(),
        };
        let result = self.connection.tooling_create("DebugLevel", &body).await?;
        Ok(if result.success { result.id } else { None })
    }

    #[instrument(skip(self))]
    async fn update_trace_flag(&self, id: &str, expiration_date: DateTime<Utc>) -> Result<bool> {
        let body = TraceFlagUpdate {
            start_date: Utc::now(),
            expiration_date,
        };
        let result = self.connection.tooling_update("TraceFlag", id, &body).await?;
        Ok(result.success)
    }

    #[instrument(skip(self))]
    async fn create_trace_flag(
        &self,
        user_id: &str,
        debug_level_id: &str,
        expiration_date: DateTime<Utc>,
    ) -> Result<bool> {
        let body = NewTraceFlag {
            traced_entity_id: user_id.to_string(),
            log_type: LOG_TYPE_DEVELOPER.to_string(),
            debug_level_id: debug_level_id.to_string(),
            start_date: Utc::now(),
            expiration_date,
        };
        let result = self.connection.tooling_create("TraceFlag", &body).await?;
        Ok(result.success)
    }
}

/// Pick the expiration for a refreshed flag.
///
/// Keeps `candidate` while it leaves more than [`LOG_TIMER_LENGTH_MINUTES`]
/// on the clock, otherwise floors it to `now` plus the timer length.
pub fn calculate_expiration_date(candidate: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if candidate - now > Duration::minutes(LOG_TIMER_LENGTH_MINUTES) {
        candidate
    } else {
        now + Duration::minutes(LOG_TIMER_LENGTH_MINUTES)
    }
}

/// Parse a datetime as the org returns it: RFC 3339 or the legacy
/// `+0000`-offset form. An unparseable value reads as `None`.
pub(crate) fn parse_salesforce_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.3f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
