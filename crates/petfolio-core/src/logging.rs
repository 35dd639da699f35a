//! Structured logging schema and subscriber setup for petfolio.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, UI degrades (e.g. select falls back to empty) |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, cache hits/misses, request targets |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "client", "store"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "http", "pet_store"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "list_pets", "select", "load_all"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Pet identity being operated on.
pub const PET_ID: &str = "pet_id";

/// Video identity being operated on.
pub const VIDEO_ID: &str = "video_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of records returned by a list call.
pub const RESULT_COUNT: &str = "result_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Whether the store answered from cache without a network call.
pub const CACHE_HIT: &str = "cache_hit";

/// Initialize a fmt subscriber with an env-filtered level.
///
/// Falls back to `petfolio=debug` when `RUST_LOG` is unset. Safe to call
/// once per process; embedding applications that install their own
/// subscriber should skip this.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "petfolio=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
