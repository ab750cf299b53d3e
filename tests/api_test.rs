//! HTTP boundary tests driving the real router with oneshot requests.

mod common;

use axum::http::{Method, StatusCode};
use common::{request, response_json, test_app};
use serde_json::json;

#[tokio::test]
async fn root_and_health_respond() {
    let app = test_app();

    let response = request(&app, Method::GET, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Street Food Raw Materials API");

    let response = request(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn materials_listing_returns_joined_suppliers() {
    let app = test_app();

    let response = request(&app, Method::GET, "/api/materials", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let materials = body.as_array().expect("array body");
    assert_eq!(materials.len(), 10);
    for material in materials {
        assert!(material["id"].is_number());
        assert!(material["supplier"]["id"].is_number());
        assert!(material["supplier"]["name"].is_string());
        assert!(material.get("inStock").is_some());
        assert!(material.get("groupPrice").is_some());
        assert!(material.get("minGroupQuantity").is_some());
    }
}

#[tokio::test]
async fn verified_filter_over_http() {
    let app = test_app();

    let response = request(
        &app,
        Method::GET,
        "/api/materials?filter_by=verified&sort_by=supplier",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    for material in body.as_array().expect("array") {
        assert_eq!(material["supplier"]["verified"], json!(true));
    }
}

#[tokio::test]
async fn unknown_sort_value_is_rejected_with_400() {
    let app = test_app();
    let response = request(&app, Method::GET, "/api/materials?sort_by=rating", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_filter_value_is_rejected_with_400() {
    let app = test_app();
    let response = request(&app, Method::GET, "/api/materials?filter_by=cheap", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn categories_and_suppliers_endpoints_list_reference_data() {
    let app = test_app();

    let response = request(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().expect("array").len(), 8);

    let response = request(&app, Method::GET, "/api/suppliers", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn cart_lifecycle_over_http() {
    let app = test_app();

    // Empty cart synthesized for unknown session.
    let response = request(&app, Method::GET, "/api/cart/s1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["count"], json!(0));
    assert!(body["items"].as_array().expect("items").is_empty());

    // Add twice; the line merges.
    let payload = json!({"material_id": 1, "quantity": 2, "is_group": false});
    let response = request(&app, Method::POST, "/api/cart/s1/add", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json!({"material_id": 1, "quantity": 3});
    let response = request(&app, Method::POST, "/api/cart/s1/add", Some(payload)).await;
    let body = response_json(response).await;
    let items = body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], json!(5));
    assert_eq!(body["count"], json!(5));

    // Update the line down, then to zero.
    let item_id = items[0]["id"].as_i64().expect("item id");
    let response = request(
        &app,
        Method::PUT,
        &format!("/api/cart/s1/item/{item_id}"),
        Some(json!({"quantity": 1})),
    )
    .await;
    let body = response_json(response).await;
    assert_eq!(body["items"][0]["quantity"], json!(1));

    let response = request(
        &app,
        Method::PUT,
        &format!("/api/cart/s1/item/{item_id}"),
        Some(json!({"quantity": 0})),
    )
    .await;
    let body = response_json(response).await;
    assert!(body["items"].as_array().expect("items").is_empty());
}

#[tokio::test]
async fn add_with_zero_quantity_is_rejected() {
    let app = test_app();
    let response = request(
        &app,
        Method::POST,
        "/api/cart/s1/add",
        Some(json!({"material_id": 1, "quantity": 0})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_unknown_material_returns_404() {
    let app = test_app();
    let response = request(
        &app,
        Method::POST,
        "/api/cart/s1/add",
        Some(json!({"material_id": 999, "quantity": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"], json!("Not Found"));
    assert!(body["message"].as_str().expect("message").contains("999"));
}

#[tokio::test]
async fn clearing_a_cart_over_http() {
    let app = test_app();
    let payload = json!({"material_id": 2, "quantity": 4});
    request(&app, Method::POST, "/api/cart/s1/add", Some(payload)).await;

    let response = request(&app, Method::DELETE, "/api/cart/s1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = request(&app, Method::GET, "/api/cart/s1", None).await;
    let body = response_json(response).await;
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
async fn checkout_flow_over_http() {
    let app = test_app();

    // 45 x 2 + 30 x 1 = 120.
    request(
        &app,
        Method::POST,
        "/api/cart/s1/add",
        Some(json!({"material_id": 1, "quantity": 2})),
    )
    .await;
    request(
        &app,
        Method::POST,
        "/api/cart/s1/add",
        Some(json!({"material_id": 5, "quantity": 1})),
    )
    .await;

    let response = request(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({"session_id": "s1"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["message"], json!("Order placed successfully"));
    assert!(body["order_id"].is_string(), "order id crosses as a string");
    assert_eq!(body["total_amount"], json!("120"));

    // Cart cleared by the checkout.
    let response = request(&app, Method::GET, "/api/cart/s1", None).await;
    let body = response_json(response).await;
    assert_eq!(body["count"], json!(0));

    // Order visible in the session history.
    let response = request(&app, Method::GET, "/api/orders/s1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let orders = body.as_array().expect("orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["status"], json!("confirmed"));
    assert_eq!(orders[0]["items"].as_array().expect("items").len(), 2);
}

#[tokio::test]
async fn checkout_empty_cart_returns_400_and_no_order() {
    let app = test_app();

    let response = request(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({"session_id": "ghost"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = request(&app, Method::GET, "/api/orders/ghost", None).await;
    let body = response_json(response).await;
    assert!(body.as_array().expect("orders").is_empty());
}
