//! Integration tests for `ApiClient` using wiremock HTTP mocks.

use shopfront_api::{
    params, AdvancedCriteria, ApiClient, ApiConfig, ListQuery, ProductApi, SearchCriteria,
};
use shopfront_core::{Error, ProductUpdate};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig::new(base_url)).expect("client construction should not fail")
}

fn page_body() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {
                "id": "1",
                "name": "Bajaj DMH90 Neo 90L Desert Air Cooler",
                "price": 1999,
                "quantity": 3,
                "description": "Air Cooler for Home",
                "category": "Home & Kitchen",
                "brand": "Bajaj"
            },
            {
                "id": "2",
                "name": "Gel Pen",
                "price": 50,
                "quantity": 0,
                "description": "Blue ink",
                "category": "Books & Stationery",
                "brand": "Cello"
            }
        ],
        "navigation": {
            "self": "/products?start=1&limit=10",
            "next": "/products?start=11&limit=10",
            "prev": null,
            "pages": 4,
            "current": 1
        }
    })
}

#[tokio::test]
async fn list_products_sends_limit_and_parses_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list_products(&ListQuery::page(None, 10))
        .await
        .expect("should parse page");

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].price, 1999.0);
    assert_eq!(page.data[1].quantity, 0);
    assert_eq!(page.navigation.pages, 4);
    assert_eq!(
        page.navigation.next.as_deref(),
        Some("/products?start=11&limit=10")
    );
    assert!(page.navigation.prev.is_none());
}

#[tokio::test]
async fn category_only_search_sends_exactly_category_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .mount(&server)
        .await;

    let criteria = SearchCriteria::Advanced(AdvancedCriteria {
        category: "Electronics".into(),
        ..Default::default()
    });
    let client = test_client(&server.uri());
    client
        .list_products(&ListQuery::from_criteria(&criteria, 10))
        .await
        .expect("search should succeed");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let mut keys: Vec<String> = received[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    keys.sort();
    assert_eq!(keys, vec![params::CATEGORY, params::LIMIT]);
}

#[tokio::test]
async fn fetch_uri_uses_navigation_path_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("start", "11"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .fetch_uri("/products?start=11&limit=10")
        .await
        .expect("navigation fetch should succeed");
}

#[tokio::test]
async fn list_products_maps_server_error_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_products(&ListQuery::page(None, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status { status: 500 }));
}

#[tokio::test]
async fn list_products_reports_decode_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_products(&ListQuery::page(None, 10))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn get_product_returns_single_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "abc123",
            "name": "Desk Lamp",
            "price": 799.5,
            "quantity": 12,
            "description": "LED",
            "category": "Home & Kitchen",
            "brand": "Philips"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client.get_product("abc123").await.expect("should parse");

    assert_eq!(product.id, "abc123");
    assert_eq!(product.price, 799.5);
    assert_eq!(product.brand, "Philips");
}

#[tokio::test]
async fn get_product_missing_is_status_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_product("nope").await.unwrap_err();
    assert_eq!(err.http_status(), Some(404));
}

fn sample_update() -> ProductUpdate {
    ProductUpdate {
        name: "Desk Lamp".into(),
        price: 799.5,
        quantity: 12,
        category: "Home & Kitchen".into(),
        description: "LED".into(),
        brand: "Philips".into(),
    }
}

#[tokio::test]
async fn update_product_succeeds_on_204_without_id_in_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/products/abc123"))
        .and(body_json(serde_json::json!({
            "name": "Desk Lamp",
            "price": 799.5,
            "quantity": 12,
            "category": "Home & Kitchen",
            "description": "LED",
            "brand": "Philips"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .update_product("abc123", &sample_update())
        .await
        .expect("204 should be success");

    let received = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = received[0].body_json().expect("json body");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_product_treats_200_as_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/products/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .update_product("abc123", &sample_update())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status: 200 }));
}

#[tokio::test]
async fn update_product_without_server_is_transport_error() {
    // Bind then drop a listener so nothing accepts on the port
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("addr"))
    };

    let client = test_client(&uri);
    let err = client
        .update_product("abc123", &sample_update())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn base_path_prefix_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(|req: &Request| {
            assert_eq!(req.url.path(), "/api/products");
            ResponseTemplate::new(200).set_body_json(page_body())
        })
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/api/", server.uri()));
    client
        .list_products(&ListQuery::page(None, 10))
        .await
        .expect("prefixed base should work");
}
