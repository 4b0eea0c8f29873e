//! Centralized default constants for the Skald SDK.
//!
//! **This module is the single source of truth** for shared default values.
//! Both SDK crates reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// API ENDPOINT
// =============================================================================

/// Production Skald API endpoint.
pub const BASE_URL: &str = "https://api.useskald.com";

/// Request timeout in seconds. Applies per request, including the initial
/// response of a streaming call.
pub const TIMEOUT_SECS: u64 = 30;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page number for memo listing (1-based).
pub const PAGE: u32 = 1;

/// Default page size for memo listing.
pub const PAGE_SIZE: u32 = 20;
