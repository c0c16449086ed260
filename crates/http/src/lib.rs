//! Notes service HTTP module
//!
//! Wire types shared with the notes service and, behind the `client` feature,
//! type-safe clients for its public and authenticated endpoints.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
