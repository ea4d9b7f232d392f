#![allow(clippy::unwrap_used)]
// End-to-end tests through `Backoffice` against a wiremock backend.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk_core::{
    Backoffice, BrandForm, BrandStatus, ClientConfig, CoreError, DeleteOutcome, PageOutcome,
    ResourceSource,
};

async fn setup(page_size: u32) -> (MockServer, Backoffice) {
    let server = MockServer::start().await;
    let mut config = ClientConfig::new(
        server.uri().parse().unwrap(),
        "test-token".to_string().into(),
    );
    config.page_size = page_size;
    let backoffice = Backoffice::new(config).unwrap();
    (server, backoffice)
}

fn product_json(id: u64) -> serde_json::Value {
    json!({ "id": id, "name": format!("Product {id}"), "sku": format!("SKU-{id}"), "price": "9.99" })
}

#[tokio::test]
async fn test_created_brand_shows_up_in_list() {
    let (server, backoffice) = setup(10).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/admin/brands"))
        .and(body_string_contains("Acme"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "brand_id": 7, "brand_name": "Acme", "brand_status": "1" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/brands"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "brand_id": 7, "brand_name": "Acme", "brand_status": "active" }]
        })))
        .mount(&server)
        .await;

    let brands = backoffice.brands();
    let created = brands
        .source()
        .create(&BrandForm {
            name: "Acme".into(),
            status: "1".parse().unwrap(),
            logo: None,
        })
        .await
        .unwrap();
    assert_eq!(created.brand_status, BrandStatus::Active);

    assert_eq!(
        brands.store().set_page(1).await.unwrap(),
        PageOutcome::Applied
    );
    let items = brands.store().items();
    let acme = items.iter().find(|b| b.brand_name == "Acme").unwrap();
    assert!(acme.brand_status.is_active());
}

#[tokio::test]
async fn test_product_delete_steps_back_over_http() {
    let (server, backoffice) = setup(2).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/products"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "products": [product_json(3)] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/products"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "products": [product_json(1), product_json(2)] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/products/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let products = backoffice.products();
    products.store().set_page(2).await.unwrap();

    let only = products.store().items()[0].clone();
    products.mutations().request_delete(only).await.unwrap();
    let outcome = products.mutations().confirm_delete().await.unwrap();

    assert_eq!(outcome, DeleteOutcome::SteppedBack { page: 1 });
    assert_eq!(products.store().page_number(), 1);
    assert_eq!(products.store().items().len(), 2);
    assert!(products.store().has_next());
}

#[tokio::test]
async fn test_delete_404_is_treated_as_done() {
    let (server, backoffice) = setup(10).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "products": [product_json(1), product_json(2)] }
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/products/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let products = backoffice.products();
    products.store().set_page(1).await.unwrap();
    let target = products.store().items()[1].clone();
    products.mutations().request_delete(target).await.unwrap();

    assert_eq!(
        products.mutations().confirm_delete().await.unwrap(),
        DeleteOutcome::AlreadyAbsent
    );
    assert_eq!(products.store().items().len(), 2);
}

#[tokio::test]
async fn test_unauthorized_list_surfaces_auth_error() {
    let (server, backoffice) = setup(10).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/admin/brands"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let brands = backoffice.brands();
    let err = brands.store().set_page(1).await.unwrap_err();
    assert!(err.is_auth());
    assert!(matches!(
        brands.store().snapshot().last_error,
        Some(CoreError::Auth { .. })
    ));
}

#[tokio::test]
async fn test_notifications_pass_through() {
    let (server, backoffice) = setup(10).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/notifications/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "notification": { "id": 3, "title": "Sale", "body": "Today only" } }
        })))
        .mount(&server)
        .await;

    let sent = backoffice
        .send_notification("Sale", "Today only")
        .await
        .unwrap();
    assert_eq!(sent.title, "Sale");
}
