//! API constants

/// Prefix shared by every versioned route
pub const API_PREFIX: &str = "/api/v1";

/// Crate version, reported by the health check
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
