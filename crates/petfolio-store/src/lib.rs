//! # petfolio-store
//!
//! Session-lifetime client-side cache of canonical pets.
//!
//! [`PetStore`] is the single authoritative in-memory collection for the
//! active session. It owns three pieces of state: the cached `collection`,
//! the `current` pet the detail view is showing, and an `is_loading` flag
//! held true for the duration of a collection load. The backend client is
//! injected, so tests substitute a canned one.

pub mod store;

pub use store::PetStore;
