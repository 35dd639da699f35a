//! The backend API abstraction.
//!
//! One method per REST endpoint, mirroring the backend surface exactly. No
//! retries, no status-code interpretation beyond success/failure, no payload
//! validation before sending; all of that is owned by the backend.

use async_trait::async_trait;
use serde_json::Value;

use petfolio_core::{NewPet, PetPatch, Product, Result, VetPlace, VideoAnalysis, VideoUploadReceipt};

/// Client for the petfolio backend REST surface.
///
/// Implementations are injected into the store (and tests substitute
/// [`crate::mock::MockApiClient`]), so every method takes `&self` and the
/// trait is object-safe.
#[async_trait]
pub trait ApiClient: Send + Sync {
    // ─── Pets ──────────────────────────────────────────────────────────────

    /// GET `/pets/`. Returns the raw array of records; normalize before use.
    async fn list_pets(&self) -> Result<Value>;

    /// GET `/pets/{id}`. Returns the raw record; normalize before use.
    async fn get_pet(&self, id: &str) -> Result<Value>;

    /// POST `/pets/`. Returns the raw created record.
    async fn create_pet(&self, pet: &NewPet) -> Result<Value>;

    /// PUT `/pets/{id}` with a partial payload. Returns the raw updated record.
    async fn update_pet(&self, id: &str, patch: &PetPatch) -> Result<Value>;

    /// DELETE `/pets/{id}`. Returns the backend's ack body.
    async fn delete_pet(&self, id: &str) -> Result<Value>;

    /// POST `/pets/{id}/image` as a multipart `file` part.
    async fn upload_pet_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> Result<Value>;

    // ─── Videos ────────────────────────────────────────────────────────────

    /// POST `/videos/upload/{pet_id}` as a multipart `file` part.
    async fn upload_video(
        &self,
        pet_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<VideoUploadReceipt>;

    /// GET `/videos/{video_id}`.
    async fn get_video_analysis(&self, video_id: &str) -> Result<VideoAnalysis>;

    /// GET `/videos/pet/{pet_id}/videos`.
    async fn list_pet_videos(&self, pet_id: &str) -> Result<Vec<VideoAnalysis>>;

    // ─── Shop ──────────────────────────────────────────────────────────────

    /// GET `/shop/products`, with optional category/species filters.
    async fn list_products(
        &self,
        category: Option<&str>,
        species: Option<&str>,
    ) -> Result<Vec<Product>>;

    /// GET `/shop/categories`.
    async fn list_categories(&self) -> Result<Vec<String>>;

    // ─── Vets ──────────────────────────────────────────────────────────────

    /// GET `/vets/nearby?lat=&lng=&radius=`.
    async fn find_nearby_vets(&self, lat: f64, lng: f64, radius: u32) -> Result<Vec<VetPlace>>;

    /// GET `/vets/{place_id}/details`. Shape is owned by the places provider,
    /// so the body passes through untyped.
    async fn get_vet_details(&self, place_id: &str) -> Result<Value>;
}
