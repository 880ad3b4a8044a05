//! Connection layer for talking to a cluster endpoint
//!
//! This module turns a raw, user-supplied endpoint URL into the pieces a
//! request needs: a canonical base URL and the header maps that go with it.
//!
//! # Modules
//!
//! - [`endpoint`]: Endpoint URL normalization
//! - [`headers`]: Connection headers and per-index custom headers

pub mod endpoint;
pub mod headers;

pub use endpoint::{Endpoint, parse_endpoint};
pub use headers::{
    CustomHeaderSource, HeaderPair, NoCustomHeaders, StaticHeaderSource, auth_headers,
    headers_from_pairs,
};
