//! Canonical data models for the petfolio client.
//!
//! `Pet` is the canonical in-memory shape every UI consumer works with; raw
//! backend records only become `Pet`s through [`crate::normalize`]. The
//! remaining types mirror backend response bodies directly and deserialize
//! without a normalization pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// PET ENTITY
// =============================================================================

/// A pet record in canonical normalized form.
///
/// Serializes with the snake_case wire names, so feeding a serialized `Pet`
/// back through the normalizer is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Backend-supplied identity, stable for the record's lifetime.
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Backend-relative path or URL of the profile image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub health_score: i64,
    pub videos_analyzed: i64,
    pub appointments: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Always "active"; the backend does not serve a status field.
    pub status: String,
}

/// Payload for creating a pet.
#[derive(Debug, Clone, Serialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload for a pet. Absent fields are left untouched by
/// the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// VIDEO ANALYSIS
// =============================================================================

/// Acknowledgement returned by the video upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoUploadReceipt {
    pub video_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// One observation produced by the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Analysis record for one uploaded video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoAnalysis {
    pub id: String,
    pub pet_id: String,
    #[serde(default)]
    pub video_path: String,
    /// "pending", "processing", "completed", or "failed".
    #[serde(default)]
    pub analysis_status: String,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub confidence_score: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// SHOP
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Species this product is suitable for, used by the shop filter.
    #[serde(default)]
    pub suitable_for: Vec<String>,
}

/// Wrapper shape of the categories endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

// =============================================================================
// VETS
// =============================================================================

/// Geographic coordinate pair as served by the places API.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One nearby veterinarian, already flattened by the backend from the places
/// provider's response.
#[derive(Debug, Clone, Deserialize)]
pub struct VetPlace {
    /// Provider place id, used for the details lookup.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub open_now: bool,
}

/// Wrapper shape of the nearby-vets endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VetList {
    pub vets: Vec<VetPlace>,
}
