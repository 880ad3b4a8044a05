/// Extracts the leading numeric segment of a dotted version string.
///
/// The major version selects version-specific request/response schemas, so
/// only the part before the first `.` matters. An empty or unresolved
/// version string falls back to `default_major`.
///
/// Examples:
/// - "7.10.2" -> "7"
/// - "9" -> "9"
/// - "" -> default_major
pub fn major_version_of(version: &str, default_major: &str) -> String {
    match version.split('.').next() {
        Some(major) if !major.is_empty() => major.to_string(),
        _ => default_major.to_string(),
    }
}
