use serde::Deserialize;

// =============================================================================
// Resolver constants
// =============================================================================

/// Major version assumed when the cluster does not report a usable version.
pub const DEFAULT_MAJOR_VERSION: &str = "7";

/// Timeout for version probe requests in milliseconds (30 seconds)
pub const PROBE_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every probe request
pub const USER_AGENT: &str = "cluster-version";

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Major version returned when neither probe yields a version string
    pub default_major_version: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_major_version: DEFAULT_MAJOR_VERSION.to_string(),
            timeout_ms: PROBE_TIMEOUT_MS,
        }
    }
}
