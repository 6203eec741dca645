//! Localized user-facing messages.
//!
//! Fatal errors carry human-readable text looked up here rather than inline
//! string literals, so the wording lives in one table per locale. Only the
//! English table exists today.

/// Message labels for user-facing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NoDefaultUsername,
    UnknownUser,
    FailedToCreateDebugLevel,
}

/// Look up the localized text for a label.
pub fn localize(label: Label) -> &'static str {
    // Single-locale table. Additional locales dispatch here when added.
    match label {
        Label::NoDefaultUsername => "No default org username is configured on the connection",
        Label::UnknownUser => "The configured username does not match any user in the org",
        Label::FailedToCreateDebugLevel => "Failed to create a DebugLevel record in the org",
    }
}
