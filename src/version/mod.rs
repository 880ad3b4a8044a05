//! Version resolution layer
//!
//! Determines the major version of a remote cluster by probing its HTTP API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   no version   ┌─────────────┐
//! │ root probe  │───────────────▶│  _settings  │
//! │ GET {base}/ │                │  fallback   │
//! └─────────────┘                └─────────────┘
//!        │                              │
//!        └──────────────┬───────────────┘
//!                       ▼
//!               major version
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for endpoint parsing and version resolution
//! - [`major`]: Major-version extraction from dotted version strings
//! - [`resolver`]: The primary/fallback probe chain

pub mod error;
pub mod major;
pub mod resolver;

pub use error::{ConnectionError, ResolveError};
pub use major::major_version_of;
pub use resolver::{RootProbe, VersionResolver, resolve_major_version};
