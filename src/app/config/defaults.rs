// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! # Categories
//!
//! - **API**: Backend location and environment override
//! - **Image cache**: Number of decoded images kept in memory

pub use crate::media::cache::{
    DEFAULT_CAPACITY as DEFAULT_IMAGE_CACHE_CAPACITY, MAX_CAPACITY as MAX_IMAGE_CACHE_CAPACITY,
    MIN_CAPACITY as MIN_IMAGE_CACHE_CAPACITY,
};

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend used when neither CLI, environment nor config name one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Environment variable supplying the backend base URL.
pub const ENV_API_URL: &str = "GALLERY_ADMIN_API_URL";

/// Upper bound accepted for `[api] request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;
