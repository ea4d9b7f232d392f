#![allow(clippy::unwrap_used)]
// Integration tests for `AdminClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk_api::{
    AdminClient, BrandForm, BrandStatus, Credentials, Error, MediaFile, ProductForm,
    TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::new(
        &server.uri(),
        &Credentials::bearer("test-token".to_string().into()),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn admin_path(suffix: &str) -> String {
    format!("/api/v1/admin/{suffix}")
}

fn brand_json(id: u64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "brand_id": id,
        "brand_name": name,
        "brand_slug": name.to_lowercase(),
        "brand_status": status,
        "logo": format!("https://cdn.example/brands/{id}.png")
    })
}

fn product_form() -> ProductForm {
    ProductForm {
        name: "Desk Lamp".into(),
        small_desc: "Warm light".into(),
        desc: "A lamp for desks".into(),
        sku: "LMP-1".into(),
        price: 19.9,
        quantity: 4,
        has_discount: false,
        discount: None,
        start_discount: None,
        end_discount: None,
        brand_id: 3,
        category_id: 9,
        images: vec![MediaFile::new("lamp.png", b"PNG".to_vec())],
    }
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_bearer_token_attached() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("brands")))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_brands(1, 10).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("products")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })),
        )
        .mount(&server)
        .await;

    let err = client.list_products(1, 10).await.unwrap_err();
    assert!(err.is_auth_expired());
    match err {
        Error::Authentication { message } => assert_eq!(message, "Unauthenticated."),
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── Brands ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_brands_sends_pagination() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("brands")))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [brand_json(3, "Acme", "active"), brand_json(4, "Globex", "inactive")]
        })))
        .mount(&server)
        .await;

    let page = client.list_brands(2, 2).await.unwrap();
    assert_eq!(page.page, 2);
    assert!(page.is_full());
    assert_eq!(page.items[0].brand_name, "Acme");
    assert_eq!(page.items[1].brand_status, BrandStatus::Inactive);
}

#[tokio::test]
async fn test_create_brand_then_list() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(admin_path("brands")))
        .and(body_string_contains("Acme"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "data": brand_json(11, "Acme", "1") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(admin_path("brands")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [brand_json(11, "Acme", "active")]
        })))
        .mount(&server)
        .await;

    let form = BrandForm {
        name: "Acme".into(),
        status: "1".parse().unwrap(),
        logo: None,
    };
    let created = client.create_brand(&form).await.unwrap();
    assert_eq!(created.brand_id, 11);

    let listed = client.list_brands(1, 10).await.unwrap();
    let acme = listed
        .items
        .iter()
        .find(|b| b.brand_name == "Acme")
        .expect("Acme should be listed");
    assert!(acme.brand_status.is_active());
}

#[tokio::test]
async fn test_update_brand_tunnels_put() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(admin_path("brands/5")))
        .and(body_string_contains("_method"))
        .and(body_string_contains("PUT"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": brand_json(5, "Renamed", "inactive") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let form = BrandForm {
        name: "Renamed".into(),
        status: BrandStatus::Inactive,
        logo: Some(MediaFile::new("logo.png", vec![1, 2, 3])),
    };
    let brand = client.update_brand(5, &form).await.unwrap();
    assert_eq!(brand.brand_name, "Renamed");
    assert_eq!(brand.brand_status, BrandStatus::Inactive);
}

#[tokio::test]
async fn test_get_brand_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("brands/404")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.get_brand(404).await;
    assert!(
        matches!(result, Err(ref e) if e.is_not_found()),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_delete_brand() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(admin_path("brands/8")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_brand(8).await.unwrap();
}

// ── Products ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products_nested_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("products")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "products": [{
                "id": 12,
                "name": "Desk Lamp",
                "sku": "LMP-1",
                "price": "19.90",
                "quantity": 4,
                "images": [{ "id": 1, "file_name": "https://cdn.example/lamp.png" }],
                "brand": { "id": 3, "name": "Acme" }
            }] }
        })))
        .mount(&server)
        .await;

    let page = client.list_products(1, 10).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(!page.is_full());
    assert_eq!(page.items[0].images.len(), 1);
}

#[tokio::test]
async fn test_create_product_sends_images_and_flags() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(admin_path("products")))
        .and(body_string_contains("images[]"))
        .and(body_string_contains("Content-Type: image/png"))
        .and(body_string_contains("small_desc"))
        .and(body_string_contains("has_discount"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 40, "name": "Desk Lamp", "sku": "LMP-1", "price": 19.9 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client.create_product(&product_form()).await.unwrap();
    assert_eq!(product.id, 40);
}

#[tokio::test]
async fn test_update_product_validation_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(admin_path("products/40")))
        .and(body_string_contains("_method"))
        .and(body_string_contains("PUT"))
        .and(body_string_contains("lamp.png"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The sku has already been taken.",
            "errors": { "sku": ["The sku has already been taken."] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.update_product(40, &product_form()).await;
    match result {
        Err(Error::Validation { message, fields }) => {
            assert_eq!(message, "The sku has already been taken.");
            assert_eq!(fields["sku"].len(), 1);
        }
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_product_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(admin_path("products/41")))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = client.delete_product(41).await;
    match result {
        Err(Error::Server { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Server error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(admin_path("products/1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.get_product(1).await;
    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body.contains("oops")),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Notifications ───────────────────────────────────────────────────

#[tokio::test]
async fn test_latest_notifications() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notifications/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "notifications": [
                { "id": 2, "title": "Restock", "body": "Lamps are back" },
                { "id": 1, "title": "Sale" }
            ] }
        })))
        .mount(&server)
        .await;

    let latest = client.latest_notifications().await.unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].title, "Restock");
    assert!(latest[1].body.is_none());
}

#[tokio::test]
async fn test_send_notification_posts_json() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/notifications/send"))
        .and(header("content-type", "application/json"))
        .and(body_string_contains("\"title\":\"Sale\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "notification": { "id": 9, "title": "Sale", "body": "50% off" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sent = client.send_notification("Sale", "50% off").await.unwrap();
    assert_eq!(sent.id, 9);
}
