//! Client configuration.
//!
//! Configuration comes from environment variables with loopback defaults,
//! mirroring the dev-server setup the web frontend ran under:
//!
//! - `PETFOLIO_API_BASE` — API base URL. May be absolute, or the relative
//!   `/api` the frontend uses same-origin in production.
//! - `PETFOLIO_DEV_ORIGIN` — backend origin a relative base is rewritten
//!   against (the dev-proxy rule). Ignored for absolute bases.
//! - `PETFOLIO_API_TIMEOUT_SECS` — per-request timeout.

use petfolio_core::defaults;
use tracing::debug;

/// Configuration for [`crate::HttpApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL, absolute or relative (`/api`).
    pub base_url: String,
    /// Origin used to resolve a relative base; production deployments are
    /// same-origin and never hit this.
    pub dev_origin: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE.to_string(),
            dev_origin: defaults::DEV_ORIGIN.to_string(),
            timeout_secs: defaults::API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to the
    /// loopback defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PETFOLIO_API_BASE").unwrap_or_else(|_| defaults::API_BASE.to_string());
        let dev_origin = std::env::var("PETFOLIO_DEV_ORIGIN")
            .unwrap_or_else(|_| defaults::DEV_ORIGIN.to_string());
        let timeout_secs = std::env::var("PETFOLIO_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::API_TIMEOUT_SECS);

        let config = Self {
            base_url,
            dev_origin,
            timeout_secs,
        };
        debug!(base = %config.base_url, timeout_secs = config.timeout_secs, "Loaded API config");
        config
    }

    /// The absolute base URL requests are issued against.
    ///
    /// A relative base (`/api`) resolves against `dev_origin`; an absolute
    /// base passes through untouched. Trailing slashes are trimmed so path
    /// joining stays uniform.
    pub fn resolved_base(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.starts_with('/') {
            format!("{}{}", self.dev_origin.trim_end_matches('/'), base)
        } else {
            base.to_string()
        }
    }
}
