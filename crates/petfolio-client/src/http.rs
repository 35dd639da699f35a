//! Reqwest-backed implementation of [`ApiClient`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use petfolio_core::{
    Error, NewPet, PetPatch, Product, Result, VetPlace, VideoAnalysis, VideoUploadReceipt,
};

use crate::client::ApiClient;
use crate::config::ApiConfig;

/// HTTP client for the petfolio backend.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.resolved_base(),
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// The absolute base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request and decode the JSON body.
    ///
    /// Any non-2xx status becomes `Error::Request` carrying exactly the
    /// operation's message; transport failures carry the same message with
    /// the source appended. Status codes are not interpreted further.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        op_message: &str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Request(format!("{}: {}", op_message, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, error = op_message, "Backend returned failure status");
            return Err(Error::Request(op_message.to_string()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {}", e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, op_message: &str) -> Result<T> {
        debug!(path = path, "GET");
        self.execute(self.client.get(self.url(path)), op_message)
            .await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        op_message: &str,
    ) -> Result<T> {
        debug!(path = path, "POST");
        self.execute(self.client.post(self.url(path)).json(body), op_message)
            .await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        op_message: &str,
    ) -> Result<T> {
        debug!(path = path, "PUT");
        self.execute(self.client.put(self.url(path)).json(body), op_message)
            .await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
        op_message: &str,
    ) -> Result<T> {
        debug!(path = path, bytes = bytes.len(), "POST multipart");
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.execute(self.client.post(self.url(path)).multipart(form), op_message)
            .await
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "list_pets"))]
    async fn list_pets(&self) -> Result<Value> {
        self.get_json("/pets/", "Failed to fetch pets").await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "get_pet", pet_id = %id))]
    async fn get_pet(&self, id: &str) -> Result<Value> {
        self.get_json(&format!("/pets/{}", id), "Pet not found")
            .await
    }

    #[instrument(skip(self, pet), fields(subsystem = "client", component = "http", op = "create_pet"))]
    async fn create_pet(&self, pet: &NewPet) -> Result<Value> {
        self.post_json("/pets/", pet, "Failed to create pet").await
    }

    #[instrument(skip(self, patch), fields(subsystem = "client", component = "http", op = "update_pet", pet_id = %id))]
    async fn update_pet(&self, id: &str, patch: &PetPatch) -> Result<Value> {
        self.put_json(&format!("/pets/{}", id), patch, "Failed to update pet")
            .await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "delete_pet", pet_id = %id))]
    async fn delete_pet(&self, id: &str) -> Result<Value> {
        debug!(path = %format!("/pets/{}", id), "DELETE");
        self.execute(
            self.client.delete(self.url(&format!("/pets/{}", id))),
            "Failed to delete pet",
        )
        .await
    }

    #[instrument(skip(self, bytes), fields(subsystem = "client", component = "http", op = "upload_pet_image", pet_id = %id))]
    async fn upload_pet_image(&self, id: &str, file_name: &str, bytes: Vec<u8>) -> Result<Value> {
        self.post_multipart(
            &format!("/pets/{}/image", id),
            file_name,
            bytes,
            "Failed to upload image",
        )
        .await
    }

    #[instrument(skip(self, bytes), fields(subsystem = "client", component = "http", op = "upload_video", pet_id = %pet_id))]
    async fn upload_video(
        &self,
        pet_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<VideoUploadReceipt> {
        self.post_multipart(
            &format!("/videos/upload/{}", pet_id),
            file_name,
            bytes,
            "Failed to upload video",
        )
        .await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "get_video_analysis", video_id = %video_id))]
    async fn get_video_analysis(&self, video_id: &str) -> Result<VideoAnalysis> {
        self.get_json(&format!("/videos/{}", video_id), "Failed to get analysis")
            .await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "list_pet_videos", pet_id = %pet_id))]
    async fn list_pet_videos(&self, pet_id: &str) -> Result<Vec<VideoAnalysis>> {
        self.get_json(
            &format!("/videos/pet/{}/videos", pet_id),
            "Failed to fetch videos",
        )
        .await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "list_products"))]
    async fn list_products(
        &self,
        category: Option<&str>,
        species: Option<&str>,
    ) -> Result<Vec<Product>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(category) = category {
            params.push(("category", category));
        }
        if let Some(species) = species {
            params.push(("species", species));
        }

        debug!(path = "/shop/products", filters = params.len(), "GET");
        self.execute(
            self.client.get(self.url("/shop/products")).query(&params),
            "Failed to fetch products",
        )
        .await
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "list_categories"))]
    async fn list_categories(&self) -> Result<Vec<String>> {
        let list: petfolio_core::CategoryList = self
            .get_json("/shop/categories", "Failed to fetch categories")
            .await?;
        Ok(list.categories)
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "find_nearby_vets"))]
    async fn find_nearby_vets(&self, lat: f64, lng: f64, radius: u32) -> Result<Vec<VetPlace>> {
        debug!(lat = lat, lng = lng, radius = radius, "GET /vets/nearby");
        let list: petfolio_core::VetList = self
            .execute(
                self.client.get(self.url("/vets/nearby")).query(&[
                    ("lat", lat.to_string()),
                    ("lng", lng.to_string()),
                    ("radius", radius.to_string()),
                ]),
                "Failed to fetch vets",
            )
            .await?;
        Ok(list.vets)
    }

    #[instrument(skip(self), fields(subsystem = "client", component = "http", op = "get_vet_details"))]
    async fn get_vet_details(&self, place_id: &str) -> Result<Value> {
        self.get_json(
            &format!("/vets/{}/details", place_id),
            "Failed to fetch vet details",
        )
        .await
    }
}
