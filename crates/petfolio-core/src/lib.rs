//! # petfolio-core
//!
//! Core types for the petfolio client library: the canonical `Pet` model,
//! the raw-record normalizer, error taxonomy, and shared defaults.
//!
//! The backend serves records in two shapes (snake_case and camelCase, with
//! two possible identity field names). Everything downstream of the API
//! client works with the canonical shape produced by [`normalize::normalize_pet`].

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalize;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use normalize::{normalize_pet, normalize_pets};
