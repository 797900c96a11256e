//! End-to-end client behavior against the in-process stub server.

#![allow(clippy::unwrap_used)]

use serde_json::json;

use tienda_core::session::MemoryStore;
use tienda_integration_tests::{StubResponse, StubServer, envelope, error_envelope, test_token};
use tienda_storefront::{ApiClient, ApiError, ClientConfig, ProductFilter};

fn client_for(server: &StubServer) -> ApiClient<MemoryStore> {
    let config = ClientConfig::for_base_url(server.base_url().parse().unwrap());
    ApiClient::new(&config, MemoryStore::new()).unwrap()
}

fn user_json() -> serde_json::Value {
    json!({"id": 1, "email": "ana@example.com", "fullName": "Ana", "role": "CUSTOMER"})
}

fn empty_cart_json() -> serde_json::Value {
    json!({
        "cartId": 4,
        "ownerEmail": "ana@example.com",
        "items": [],
        "baseImponible": 0.0,
        "igv": 0.0,
        "igv_rate": 0.18,
        "totalConIGV": 0.0
    })
}

fn product_json(id: i64, sku: &str) -> serde_json::Value {
    json!({
        "id": id,
        "sku": sku,
        "name": format!("Product {sku}"),
        "price": 25.5,
        "stock": 8,
        "category": {"id": 2, "name": "Kitchen", "slug": "kitchen"},
        "features": []
    })
}

#[tokio::test]
async fn test_login_attaches_session_headers() {
    let token = test_token("ana@example.com", 3600);
    let server = StubServer::start([
        (
            "POST /api/auth/login",
            StubResponse::ok(envelope(
                "/api/auth/login",
                json!({"token": token, "user": user_json()}),
            )),
        ),
        (
            "POST /api/cart/merge",
            StubResponse::ok(envelope("/api/cart/merge", empty_cart_json())),
        ),
        (
            "GET /api/me",
            StubResponse::ok(envelope("/api/me", user_json())),
        ),
    ])
    .await;
    let client = client_for(&server);

    let user = client.login("ana@example.com", "secret").await.unwrap();
    assert_eq!(user.email.as_str(), "ana@example.com");
    assert!(client.is_authenticated());

    let me = client.me().await.unwrap();
    assert_eq!(me.full_name, "Ana");

    // login went out without a credential but with the visitor ID
    let login = &server.requests_for("POST", "/api/auth/login")[0];
    assert!(login.header("authorization").is_none());
    let visitor_id = login.header("x-session-id").unwrap().to_string();
    assert!(!visitor_id.is_empty());

    // once stored, the credential rides along and the visitor ID is stable
    let me_request = &server.requests_for("GET", "/api/me")[0];
    assert_eq!(
        me_request.header("authorization").unwrap(),
        format!("Bearer {token}")
    );
    assert_eq!(me_request.header("x-session-id").unwrap(), visitor_id);

    // the anonymous cart was merged right after login
    assert_eq!(server.requests_for("POST", "/api/cart/merge").len(), 1);
}

#[tokio::test]
async fn test_error_envelope_maps_to_api_error() {
    let server = StubServer::start([(
        "GET /api/products/999",
        StubResponse::status(404, error_envelope("/api/products/999", "PRODUCT_NOT_FOUND", 404)),
    )])
    .await;
    let client = client_for(&server);

    let err = client
        .product(tienda_core::types::ProductId::new(999))
        .await
        .unwrap_err();
    match err {
        ApiError::Api(detail) => {
            assert_eq!(detail.code, "PRODUCT_NOT_FOUND");
            assert_eq!(detail.status, 404);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_credential_clears_session() {
    let server = StubServer::start([(
        "GET /api/me",
        StubResponse::status(401, error_envelope("/api/me", "UNAUTHENTICATED", 401)),
    )])
    .await;
    let client = client_for(&server);

    client
        .session()
        .set_credential(&test_token("ana@example.com", 3600))
        .unwrap();
    assert!(client.is_authenticated());

    let err = client.me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_paginator_drives_product_listing() {
    let server = StubServer::start([(
        "GET /api/products",
        StubResponse::ok(envelope(
            "/api/products",
            json!({
                "content": [product_json(1, "MUG-01"), product_json(2, "MUG-02")],
                "totalPages": 3,
                "totalElements": 30,
                "number": 0,
                "size": 12
            }),
        )),
    )])
    .await;
    let client = client_for(&server);

    let pager = client.product_pager(ProductFilter::default());
    pager.reload().await;

    assert_eq!(pager.total_pages(), 3);
    let data = pager.data();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].sku, "MUG-01");
    assert!(!pager.is_loading());
}

#[tokio::test]
async fn test_about_lives_at_top_level_path() {
    let server = StubServer::start([(
        "GET /api/about",
        StubResponse::ok(envelope(
            "/api/about",
            json!([{
                "key": "mission",
                "title": "Our mission",
                "subtitle": "Why we sell what we sell",
                "cards": []
            }]),
        )),
    )])
    .await;
    let client = client_for(&server);

    let sections = client.about().await.unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].key, "mission");
    assert_eq!(server.requests_for("GET", "/api/about").len(), 1);
}

#[tokio::test]
async fn test_features_arrive_as_page_envelope() {
    let server = StubServer::start([(
        "GET /api/features",
        StubResponse::ok(envelope(
            "/api/features",
            json!({
                "content": [{"id": 1, "name": "color", "value": "blue"}],
                "totalPages": 1,
                "totalElements": 1,
                "number": 0,
                "size": 12
            }),
        )),
    )])
    .await;
    let client = client_for(&server);

    let page = client.features(None).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].name, "color");
    assert_eq!(page.total_pages, Some(1));
}

#[tokio::test]
async fn test_anonymous_checkout_uses_anonymous_endpoint() {
    let order_json = json!({
        "id": 7,
        "orderSku": "ORD-2024-0007",
        "customerEmail": "guest@example.com",
        "status": "PENDING",
        "addressDetail": {"id": 1, "city": "Lima", "state": "Lima", "zipCode": "15001", "country": "PE"},
        "items": [],
        "total": 118.0,
        "createdAt": "2024-03-01T10:00:00Z"
    });
    let server = StubServer::start([(
        "POST /api/orders/anonymous",
        StubResponse::ok(envelope("/api/orders/anonymous", order_json)),
    )])
    .await;
    let client = client_for(&server);

    let order = client
        .create_order(&tienda_storefront::NewOrder {
            customer_email: "guest@example.com".to_string(),
            is_anonymous: true,
            address_detail: tienda_storefront::NewAddress {
                id: None,
                city: "Lima".to_string(),
                state: "Lima".to_string(),
                zip_code: "15001".to_string(),
                country: "PE".to_string(),
            },
            items: vec![],
        })
        .await
        .unwrap();

    assert_eq!(order.order_sku, "ORD-2024-0007");
    assert_eq!(server.requests_for("POST", "/api/orders").len(), 0);
    assert_eq!(server.requests_for("POST", "/api/orders/anonymous").len(), 1);
}
