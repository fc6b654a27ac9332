//! Storage-safe names for classes and rooms.

use crate::RosterError;

/// Reduce a display name to a storage key.
///
/// Keeps ASCII and Unicode alphanumerics, spaces, `-` and `_`, trims the
/// result, then replaces spaces with `_`.
pub fn sanitize_name(name: &str) -> Result<String, RosterError> {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let key = kept.trim().replace(' ', "_");
    if key.is_empty() {
        return Err(RosterError::InvalidName(name.to_string()));
    }
    Ok(key)
}
