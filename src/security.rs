//! SOQL escaping and identifier validation.
//!
//! Every user-provided value interpolated into a SOQL string literal must go
//! through [`escape_soql_string`], and every ID interpolated into a URL path
//! must pass [`is_valid_salesforce_id`].

/// Escape a string value for use inside a SOQL string literal.
///
/// Escapes single quotes, backslashes, and control characters that have
/// special meaning in SOQL literals.
///
/// # Example
///
/// ```rust
/// use sf_trace_flags::security::escape_soql_string;
///
/// let safe = escape_soql_string("o'brien@example.com");
/// assert_eq!(safe, "o\\'brien@example.com");
/// ```
#[must_use]
pub fn escape_soql_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '\'' => escaped.push_str("\\'"),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Check whether a string looks like a Salesforce record ID.
///
/// IDs are 15 or 18 alphanumeric ASCII characters.
#[must_use]
pub fn is_valid_salesforce_id(id: &str) -> bool {
    (id.len() == 15 || id.len() == 18) && id.chars().all(|c| c.is_ascii_alphanumeric())
}
