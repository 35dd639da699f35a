//! # petfolio-client
//!
//! Function-per-endpoint HTTP client for the petfolio backend.
//!
//! The [`ApiClient`] trait is the seam the store and UI depend on; the
//! concrete [`HttpApiClient`] issues one reqwest call per operation and maps
//! every non-2xx response to an [`petfolio_core::Error::Request`] whose
//! message names the failed operation. Pet endpoints return raw
//! `serde_json::Value` bodies; callers pass them through the core
//! normalizer before use.

pub mod client;
pub mod config;
pub mod http;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use http::HttpApiClient;
