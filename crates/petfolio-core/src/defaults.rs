//! Centralized default constants for the petfolio client.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates should reference these constants instead of defining their own
//! magic numbers.

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Health score assumed when the backend payload carries neither
/// `health_score` nor `healthScore`.
pub const HEALTH_SCORE: i64 = 90;

/// Videos-analyzed count assumed when absent from the payload.
pub const VIDEOS_ANALYZED: i64 = 0;

/// Appointment count assumed when absent from the payload.
pub const APPOINTMENTS: i64 = 0;

/// Status assigned to every normalized pet. The backend does not serve a
/// status field; the client assumes every pet it can fetch is active.
pub const PET_STATUS: &str = "active";

// =============================================================================
// API
// =============================================================================

/// Default API base URL (local development backend).
pub const API_BASE: &str = "http://127.0.0.1:8000/api";

/// Backend origin that a relative `/api` base is rewritten against in
/// development. Mirrors the dev-server proxy rule.
pub const DEV_ORIGIN: &str = "http://127.0.0.1:8000";

/// Per-request timeout (seconds).
pub const API_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// VET SEARCH
// =============================================================================

/// Default search radius for the nearby-vets endpoint (meters).
pub const VET_SEARCH_RADIUS_M: u32 = 5000;
