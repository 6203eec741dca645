//! # sf-trace-flags
//!
//! Ensure a Salesforce org user has an active Apex/Visualforce debug-log
//! trace flag, creating or refreshing the backing DebugLevel and TraceFlag
//! records through the org's Tooling API.
//!
//! ## Features
//!
//! - **Trace Flag Management** - One call makes sure debug logging is on for
//!   the connection's default user for at least the next 30 minutes
//! - **Org Connection Trait** - The org is reached through [`OrgConnection`],
//!   so tests and embedders can substitute their own transport
//! - **HTTP Connection** - [`HttpOrgConnection`] implements the trait over
//!   the REST and Tooling API endpoints
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_trace_flags::{HttpOrgConnection, TraceFlags};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_trace_flags::Error> {
//!     let connection = HttpOrgConnection::new(
//!         "https://myorg.my.salesforce.com",
//!         "access_token_here",
//!     )?
//!     .with_username("admin@myorg.example.com");
//!
//!     let manager = TraceFlags::new(connection);
//!     if manager.ensure_trace_flags().await? {
//!         println!("debug logging is active");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod connection;
mod error;
mod http;
pub mod messages;
pub mod security;
mod trace_flags;
mod types;

pub use connection::OrgConnection;
pub use error::{Error, ErrorKind, Result};
pub use http::HttpOrgConnection;
pub use trace_flags::{calculate_expiration_date, TraceFlags, LOG_TIMER_LENGTH_MINUTES};
pub use types::*;

/// Default Salesforce API version.
pub const DEFAULT_API_VERSION: &str = "62.0";
