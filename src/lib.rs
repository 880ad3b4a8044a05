//! Client-side helper that determines the major version of a remote search
//! cluster by querying its HTTP root endpoint, with a per-index `_settings`
//! fallback when the root probe yields nothing usable.
//!
//! Callers use the resolved major version to select version-specific
//! request/response schemas.

pub mod config;
pub mod connection;
pub mod version;

pub use version::error::ResolveError;
pub use version::resolver::{VersionResolver, resolve_major_version};
