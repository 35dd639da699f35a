//! Integration tests for `HttpApiClient` against a mock HTTP server.
//!
//! These verify the endpoint paths, request bodies, query-string assembly,
//! and the per-operation failure messages the UI displays.

use petfolio_client::{ApiClient, ApiConfig, HttpApiClient};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpApiClient {
    HttpApiClient::new(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_list_pets_returns_raw_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "a", "name": "Rex" },
            { "id": "b", "name": "Milo" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.list_pets().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["_id"], "a");
}

#[tokio::test]
async fn test_list_pets_non_2xx_uses_operation_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_pets().await.unwrap_err();
    assert_eq!(err.to_string(), "Request error: Failed to fetch pets");
}

#[tokio::test]
async fn test_get_pet_not_found_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_pet("missing").await.unwrap_err();
    assert_eq!(err.to_string(), "Request error: Pet not found");
}

#[tokio::test]
async fn test_create_pet_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pets/"))
        .and(body_json(json!({
            "name": "Rex",
            "species": "dog",
            "breed": "labrador",
            "gender": "male",
            "age": 3
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_id": "created-1", "name": "Rex" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let new_pet = petfolio_core::NewPet {
        name: "Rex".to_string(),
        species: "dog".to_string(),
        breed: "labrador".to_string(),
        gender: "male".to_string(),
        age: Some(3),
        weight: None,
        dob: None,
        color: None,
        description: None,
    };
    let body = client.create_pet(&new_pet).await.unwrap();
    assert_eq!(body["_id"], "created-1");
}

#[tokio::test]
async fn test_update_pet_puts_partial_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/pets/p-1"))
        .and(body_json(json!({ "age": 4 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p-1", "age": 4 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let patch = petfolio_core::PetPatch {
        age: Some(4),
        ..Default::default()
    };
    let body = client.update_pet("p-1", &patch).await.unwrap();
    assert_eq!(body["age"], 4);
}

#[tokio::test]
async fn test_delete_pet() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pets/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Pet deleted" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.delete_pet("p-1").await.unwrap();
    assert_eq!(body["message"], "Pet deleted");
}

#[tokio::test]
async fn test_image_upload_is_multipart_with_file_part() {
    let mock_server = MockServer::start().await;

    // The part name and filename both appear in the multipart body. Body
    // matching is string-based, so the payload must stay valid UTF-8.
    Mock::given(method("POST"))
        .and(path("/pets/p-1/image"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("rex.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .upload_pet_image("p-1", "rex.jpg", b"fake image bytes".to_vec())
        .await;
    assert!(result.is_ok(), "Upload should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_video_upload_decodes_receipt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/videos/upload/p-1"))
        .and(body_string_contains("clip.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "video_id": "v-9",
            "message": "Video uploaded successfully",
            "status": "pending"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let receipt = client
        .upload_video("p-1", "clip.mp4", vec![0u8; 16])
        .await
        .unwrap();
    assert_eq!(receipt.video_id, "v-9");
    assert_eq!(receipt.status, "pending");
}

#[tokio::test]
async fn test_get_video_analysis() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/v-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "v-9",
            "pet_id": "p-1",
            "video_path": "/uploads/v-9.mp4",
            "analysis_status": "completed",
            "insights": [{ "type": "behavior", "text": "high activity" }],
            "recommendations": ["more rest"],
            "confidence_score": 0.82,
            "created_at": "2026-04-01T12:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let analysis = client.get_video_analysis("v-9").await.unwrap();
    assert_eq!(analysis.analysis_status, "completed");
    assert_eq!(analysis.insights.len(), 1);
    assert_eq!(analysis.recommendations, vec!["more rest".to_string()]);
}

#[tokio::test]
async fn test_list_products_sends_filters_as_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/products"))
        .and(query_param("category", "food"))
        .and(query_param("species", "dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "prod-1", "name": "Kibble", "category": "food", "price": 12.5 }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let products = client
        .list_products(Some("food"), Some("dog"))
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Kibble");
}

#[tokio::test]
async fn test_list_products_without_filters() {
    let mock_server = MockServer::start().await;

    // No query params at all when no filter is set.
    Mock::given(method("GET"))
        .and(path("/shop/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let products = client.list_products(None, None).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_categories_unwraps_wrapper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "categories": ["food", "toys", "health"] })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories, vec!["food", "toys", "health"]);
}

#[tokio::test]
async fn test_find_nearby_vets_unwraps_wrapper_and_sends_coords() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vets/nearby"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lng", "-0.1"))
        .and(query_param("radius", "5000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vets": [{ "id": "place-1", "name": "Happy Paws", "open_now": true }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let vets = client.find_nearby_vets(51.5, -0.1, 5000).await.unwrap();
    assert_eq!(vets.len(), 1);
    assert_eq!(vets[0].id, "place-1");
    assert!(vets[0].open_now);
}

#[tokio::test]
async fn test_vet_details_passthrough() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vets/place-1/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Happy Paws",
            "formatted_phone_number": "020 1234 5678"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let details = client.get_vet_details("place-1").await.unwrap();
    assert_eq!(details["formatted_phone_number"], "020 1234 5678");
}

#[tokio::test]
async fn test_transport_failure_carries_operation_message() {
    // Nothing listens on this port; the connect error should still be
    // attributed to the operation.
    let client = HttpApiClient::new(ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    });

    let err = client.list_pets().await.unwrap_err();
    assert!(
        err.to_string().contains("Failed to fetch pets"),
        "message should name the operation: {}",
        err
    );
}
