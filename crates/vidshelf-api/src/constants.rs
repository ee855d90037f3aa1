//! API constants
//!
//! Every versioned route lives under [`API_PREFIX`]. Handler path annotations
//! for OpenAPI repeat the literal `/api/v0` because utoipa needs compile-time strings.

/// API base path prefix (version-independent)
pub const API_BASE: &str = "/api";

/// Current API version
pub const API_VERSION: &str = "v0";

/// Versioned prefix for all resource routes
pub const API_PREFIX: &str = "/api/v0";

/// Largest accepted request body. Add-video payloads are a few hundred bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;
