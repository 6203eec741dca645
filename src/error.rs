//! Error types for sf-trace-flags.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The connection has no default username configured.
    #[error("{0}")]
    Configuration(String),

    /// The configured username does not resolve to a user in the org.
    #[error("{0}")]
    UnknownUser(String),

    /// A DebugLevel record could not be created.
    #[error("{0}")]
    DebugLevel(String),

    /// The org answered with a non-success HTTP status.
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Request never produced a usable response (connect, TLS, decode).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A value was rejected before it reached the org.
    #[error("Invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error {
            kind: ErrorKind::Transport(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
