//! Canned in-memory client for deterministic testing.
//!
//! Serves fixtures instead of issuing network calls and records every
//! operation in a call log, so store tests can assert both what was returned
//! and that an operation was (or was not) reached.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use petfolio_client::mock::MockApiClient;
//!
//! let client = MockApiClient::new()
//!     .with_pets(serde_json::json!([{ "id": "a", "name": "Rex" }]))
//!     .with_failing_op("get_pet");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use petfolio_core::{
    Error, NewPet, PetPatch, Product, Result, VetPlace, VideoAnalysis, VideoUploadReceipt,
};

use crate::client::ApiClient;

/// Canned client for tests.
#[derive(Clone)]
pub struct MockApiClient {
    config: Arc<MockConfig>,
    failing_ops: Arc<Mutex<HashSet<String>>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone, Default)]
struct MockConfig {
    /// Body of the list endpoint. Defaults to an empty array.
    pets: Option<Value>,
    /// Per-identity bodies of the get-one endpoint.
    records: HashMap<String, Value>,
    /// Products served by the shop endpoint.
    products: Vec<Value>,
    /// Categories served by the shop endpoint.
    categories: Vec<String>,
    /// Simulated latency applied to every operation.
    latency_ms: u64,
}

/// One recorded operation.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
}

impl MockApiClient {
    /// Create a mock serving empty fixtures.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            failing_ops: Arc::new(Mutex::new(HashSet::new())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the raw body served by `list_pets`.
    pub fn with_pets(mut self, pets: Value) -> Self {
        Arc::make_mut(&mut self.config).pets = Some(pets);
        self
    }

    /// Set the raw record served by `get_pet` for one identity.
    pub fn with_record(mut self, id: impl Into<String>, record: Value) -> Self {
        Arc::make_mut(&mut self.config)
            .records
            .insert(id.into(), record);
        self
    }

    /// Force an operation (by its trait method name) to fail with its
    /// transport message.
    pub fn with_failing_op(self, operation: impl Into<String>) -> Self {
        self.failing_ops.lock().unwrap().insert(operation.into());
        self
    }

    /// Start failing an operation mid-test (clones share the toggle).
    pub fn fail_op(&self, operation: impl Into<String>) {
        self.failing_ops.lock().unwrap().insert(operation.into());
    }

    /// Stop failing all operations.
    pub fn clear_failures(&self) {
        self.failing_ops.lock().unwrap().clear()
    }

    /// Set the product fixtures served by `list_products`.
    pub fn with_products(mut self, products: Vec<Value>) -> Self {
        Arc::make_mut(&mut self.config).products = products;
        self
    }

    /// Set the category fixtures served by `list_categories`.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        Arc::make_mut(&mut self.config).categories = categories;
        self
    }

    /// Set simulated latency for all operations, so tests can observe
    /// in-flight state.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// All logged calls, for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of logged calls for one operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    fn log_call(&self, operation: &str, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
        });
    }

    fn check_failure(&self, operation: &str, message: &str) -> Result<()> {
        if self.failing_ops.lock().unwrap().contains(operation) {
            Err(Error::Request(message.to_string()))
        } else {
            Ok(())
        }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn list_pets(&self) -> Result<Value> {
        self.log_call("list_pets", "");
        self.check_failure("list_pets", "Failed to fetch pets")?;
        self.simulate_latency().await;
        Ok(self.config.pets.clone().unwrap_or_else(|| json!([])))
    }

    async fn get_pet(&self, id: &str) -> Result<Value> {
        self.log_call("get_pet", id);
        self.check_failure("get_pet", "Pet not found")?;
        self.simulate_latency().await;
        self.config
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Request("Pet not found".to_string()))
    }

    async fn create_pet(&self, pet: &NewPet) -> Result<Value> {
        self.log_call("create_pet", &pet.name);
        self.check_failure("create_pet", "Failed to create pet")?;
        self.simulate_latency().await;
        let mut record = serde_json::to_value(pet)?;
        record
            .as_object_mut()
            .expect("NewPet serializes to an object")
            .insert("id".to_string(), json!("mock-created"));
        Ok(record)
    }

    async fn update_pet(&self, id: &str, patch: &PetPatch) -> Result<Value> {
        self.log_call("update_pet", id);
        self.check_failure("update_pet", "Failed to update pet")?;
        self.simulate_latency().await;
        let mut record = self
            .config
            .records
            .get(id)
            .cloned()
            .unwrap_or_else(|| json!({ "id": id }));
        if let (Some(obj), Some(changes)) = (
            record.as_object_mut(),
            serde_json::to_value(patch)?.as_object(),
        ) {
            for (k, v) in changes {
                obj.insert(k.clone(), v.clone());
            }
        }
        Ok(record)
    }

    async fn delete_pet(&self, id: &str) -> Result<Value> {
        self.log_call("delete_pet", id);
        self.check_failure("delete_pet", "Failed to delete pet")?;
        self.simulate_latency().await;
        Ok(json!({ "message": "Pet deleted" }))
    }

    async fn upload_pet_image(&self, id: &str, file_name: &str, _bytes: Vec<u8>) -> Result<Value> {
        self.log_call("upload_pet_image", id);
        self.check_failure("upload_pet_image", "Failed to upload image")?;
        self.simulate_latency().await;
        Ok(json!({ "message": "Image uploaded", "filename": file_name }))
    }

    async fn upload_video(
        &self,
        pet_id: &str,
        _file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<VideoUploadReceipt> {
        self.log_call("upload_video", pet_id);
        self.check_failure("upload_video", "Failed to upload video")?;
        self.simulate_latency().await;
        Ok(VideoUploadReceipt {
            video_id: format!("mock-video-{}", pet_id),
            message: "Video uploaded".to_string(),
            status: "pending".to_string(),
        })
    }

    async fn get_video_analysis(&self, video_id: &str) -> Result<VideoAnalysis> {
        self.log_call("get_video_analysis", video_id);
        self.check_failure("get_video_analysis", "Failed to get analysis")?;
        self.simulate_latency().await;
        Ok(VideoAnalysis {
            id: video_id.to_string(),
            pet_id: "mock-pet".to_string(),
            video_path: String::new(),
            analysis_status: "completed".to_string(),
            insights: Vec::new(),
            recommendations: Vec::new(),
            confidence_score: Some(0.9),
            created_at: None,
        })
    }

    async fn list_pet_videos(&self, pet_id: &str) -> Result<Vec<VideoAnalysis>> {
        self.log_call("list_pet_videos", pet_id);
        self.check_failure("list_pet_videos", "Failed to fetch videos")?;
        self.simulate_latency().await;
        Ok(Vec::new())
    }

    async fn list_products(
        &self,
        category: Option<&str>,
        species: Option<&str>,
    ) -> Result<Vec<Product>> {
        self.log_call(
            "list_products",
            &format!("{}/{}", category.unwrap_or(""), species.unwrap_or("")),
        );
        self.check_failure("list_products", "Failed to fetch products")?;
        self.simulate_latency().await;
        self.config
            .products
            .iter()
            .map(|p| serde_json::from_value(p.clone()).map_err(Error::from))
            .collect()
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        self.log_call("list_categories", "");
        self.check_failure("list_categories", "Failed to fetch categories")?;
        self.simulate_latency().await;
        Ok(self.config.categories.clone())
    }

    async fn find_nearby_vets(&self, lat: f64, lng: f64, _radius: u32) -> Result<Vec<VetPlace>> {
        self.log_call("find_nearby_vets", &format!("{},{}", lat, lng));
        self.check_failure("find_nearby_vets", "Failed to fetch vets")?;
        self.simulate_latency().await;
        Ok(Vec::new())
    }

    async fn get_vet_details(&self, place_id: &str) -> Result<Value> {
        self.log_call("get_vet_details", place_id);
        self.check_failure("get_vet_details", "Failed to fetch vet details")?;
        self.simulate_latency().await;
        Ok(json!({ "name": "Mock Clinic", "place_id": place_id }))
    }
}
