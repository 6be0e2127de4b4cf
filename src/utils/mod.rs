use crate::errors::WikiError;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Check a page title against the route allow-list: non-empty ASCII
/// letters, digits, and spaces.
///
/// Invariant: a title must never contain a path separator or a
/// parent-directory reference, since it becomes a file name in the data
/// directory. The allow-list already excludes both, but they are rejected
/// on their own terms first.
pub fn validate_title(raw: &str) -> Result<String, WikiError> {
    if raw.is_empty() {
        return Err(WikiError::InvalidTitle);
    }
    if raw.contains(['/', '\\']) || raw.contains("..") {
        return Err(WikiError::InvalidTitle);
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(WikiError::InvalidTitle);
    }
    Ok(raw.to_string())
}
