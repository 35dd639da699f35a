//! The client-side pet store.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use petfolio_client::ApiClient;
use petfolio_core::{normalize_pet, normalize_pets, Pet, Result};

/// Session-lifetime cache of canonical pets.
///
/// `collection` is replaced wholesale by [`PetStore::load_all`] and trimmed
/// by [`PetStore::remove`]; `current` tracks what the detail view is showing
/// and is allowed to diverge from the collection (a selection resolved over
/// the network is not inserted into the cached list). A single logical
/// caller is assumed; overlapping loads are not deduplicated and the one
/// that completes last wins.
pub struct PetStore {
    api: Arc<dyn ApiClient>,
    state: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    collection: Vec<Pet>,
    current: Option<Pet>,
    is_loading: bool,
}

impl PetStore {
    /// Create a store backed by the given client.
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Fetch and cache the full collection.
    ///
    /// Holds `is_loading` true for the duration and replaces the collection
    /// under one write lock, so readers never observe a partial replace. On
    /// failure the error is re-raised after resetting the flag; the
    /// last-known-good collection is kept.
    #[instrument(skip(self), fields(subsystem = "store", component = "pet_store", op = "load_all"))]
    pub async fn load_all(&self) -> Result<()> {
        let start = Instant::now();
        self.state.write().await.is_loading = true;

        let loaded = match self.api.list_pets().await {
            Ok(raw) => normalize_pets(&raw),
            Err(e) => Err(e),
        };

        let mut state = self.state.write().await;
        state.is_loading = false;
        match loaded {
            Ok(pets) => {
                debug!(
                    result_count = pets.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Collection loaded"
                );
                state.collection = pets;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Collection load failed, keeping cached list");
                Err(e)
            }
        }
    }

    /// Append an already-normalized pet to the collection.
    ///
    /// Local only; used after a successful create so the list view reflects
    /// the new pet without a reload. Insertion order is preserved.
    pub async fn add(&self, pet: Pet) {
        self.state.write().await.collection.push(pet);
    }

    /// Read-through lookup: resolve `id` from the cache, falling back to a
    /// network fetch on miss.
    ///
    /// A cache hit sets `current` without touching the network. A miss
    /// fetches and normalizes the record and sets `current` WITHOUT
    /// inserting it into the collection. Failures (transport or malformed
    /// record) are logged and degrade to an empty `current`; the caller
    /// never sees an error, only `None`.
    #[instrument(skip(self), fields(subsystem = "store", component = "pet_store", op = "select", pet_id = %id))]
    pub async fn select(&self, id: &str) -> Option<Pet> {
        let cached = {
            let state = self.state.read().await;
            state.collection.iter().find(|p| p.id == id).cloned()
        };

        if let Some(pet) = cached {
            debug!(cache_hit = true, "Selection resolved from cache");
            self.state.write().await.current = Some(pet.clone());
            return Some(pet);
        }

        debug!(cache_hit = false, "Selection not cached, fetching");
        let fetched = match self.api.get_pet(id).await {
            Ok(raw) => normalize_pet(&raw),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(pet) => {
                self.state.write().await.current = Some(pet.clone());
                Some(pet)
            }
            Err(e) => {
                warn!(error = %e, "Selection fetch failed, clearing current");
                self.state.write().await.current = None;
                None
            }
        }
    }

    /// Drop a pet from the collection by identity.
    ///
    /// No-op when absent. `current` is deliberately left alone even when it
    /// references the removed identity; the detail view navigates away on
    /// delete, so a stale `current` is never shown.
    pub async fn remove(&self, id: &str) {
        let mut state = self.state.write().await;
        state.collection.retain(|p| p.id != id);
    }

    /// Snapshot of the cached collection, in insertion order.
    pub async fn pets(&self) -> Vec<Pet> {
        self.state.read().await.collection.clone()
    }

    /// Snapshot of the currently selected pet.
    pub async fn current(&self) -> Option<Pet> {
        self.state.read().await.current.clone()
    }

    /// Whether a collection load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }
}
