//! Filename derivation: sanitization and fallback rules for naming keys.

/// Key used when the naming cell is missing, empty, or unreadable.
pub const UNKNOWN_KEY: &str = "Unknown";

/// Strip a naming key down to characters safe for a file name.
///
/// Keeps alphanumerics, spaces, periods, and underscores; trailing
/// whitespace is removed. Idempotent: sanitizing an already-sanitized
/// string is a no-op.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Derive the base output name (without extension) for one file.
///
/// If nothing survives sanitization, falls back to `Unknown_<original>`,
/// original extension included.
pub fn base_name(key: &str, original_name: &str) -> String {
    let sanitized = sanitize_key(key);
    if sanitized.trim().is_empty() {
        format!("Unknown_{original_name}")
    } else {
        sanitized
    }
}
