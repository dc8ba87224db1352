use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use restaurant_management_rs::{app, types::Context};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> Router {
    app::router(Arc::new(Context::in_memory("test-secret")))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create(router: &Router, uri: &str, body: Value) -> Value {
    let (status, json) = send(router, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} failed: {json}");
    json["data"].clone()
}

async fn active_menu(router: &Router) -> String {
    let now = Utc::now();
    let menu = create(
        router,
        "/menus",
        json!({
            "name": "Lunch",
            "category": "Main",
            "start_date": now - Duration::days(1),
            "end_date": now + Duration::days(1),
        }),
    )
    .await;
    menu["menu_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check_greets() {
    let router = router();
    let (status, json) = send(&router, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], 200);
}

#[tokio::test]
async fn lists_foods_one_page_at_a_time() {
    let router = router();
    let menu_id = active_menu(&router).await;
    for n in 0..12 {
        create(
            &router,
            "/foods",
            json!({
                "name": format!("Dish {n}"),
                "price": 4.5,
                "food_image": "https://img.example.com/dish.png",
                "menu_id": menu_id,
            }),
        )
        .await;
    }

    let (status, json) = send(&router, Method::GET, "/foods?page=2&limit=5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 5);
    assert_eq!(json["total"], 12);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn rejects_foods_for_unknown_menus() {
    let router = router();
    let (status, json) = send(
        &router,
        Method::POST,
        "/foods",
        Some(json!({
            "name": "Jollof",
            "price": 10.0,
            "food_image": "jollof.png",
            "menu_id": "missing",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Menu not found");
}

#[tokio::test]
async fn moving_food_to_an_inactive_menu_is_rejected() {
    let router = router();
    let menu_id = active_menu(&router).await;
    let now = Utc::now();
    let expired = create(
        &router,
        "/menus",
        json!({
            "name": "Breakfast",
            "category": "Morning",
            "start_date": now - Duration::days(3),
            "end_date": now - Duration::days(2),
        }),
    )
    .await;
    let food = create(
        &router,
        "/foods",
        json!({
            "name": "Pancakes",
            "price": 3.0,
            "food_image": "pancakes.png",
            "menu_id": menu_id,
        }),
    )
    .await;
    let uri = format!("/foods/{}", food["food_id"].as_str().unwrap());

    let (status, json) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "menu_id": expired["menu_id"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Menu is not active");

    let (_, json) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(json["data"]["menu_id"], menu_id);
}

#[tokio::test]
async fn menu_bounds_cannot_cross_the_stored_window() {
    let router = router();
    let menu_id = active_menu(&router).await;
    let uri = format!("/menus/{menu_id}");
    let (_, before) = send(&router, Method::GET, &uri, None).await;
    let now = Utc::now();

    let (status, json) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "start_date": now + Duration::days(30) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Start date must not be after end date");

    let (status, _) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "end_date": now - Duration::days(30) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, after) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(after["data"], before["data"]);

    let (status, json) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "end_date": now + Duration::days(30) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["start_date"], before["data"]["start_date"]);
}

#[tokio::test]
async fn patching_a_note_only_touches_the_given_fields() {
    let router = router();
    let note = create(
        &router,
        "/notes",
        json!({ "title": "Allergies", "text": "No peanuts at table 4" }),
    )
    .await;
    let uri = format!("/notes/{}", note["note_id"].as_str().unwrap());

    let (status, json) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "title": "Allergy notice" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Allergy notice");
    assert_eq!(json["data"]["text"], "No peanuts at table 4");
}

#[tokio::test]
async fn empty_patches_are_rejected() {
    let router = router();
    let note = create(
        &router,
        "/notes",
        json!({ "title": "Allergies", "text": "No peanuts at table 4" }),
    )
    .await;
    let uri = format!("/notes/{}", note["note_id"].as_str().unwrap());

    let (status, json) = send(&router, Method::PATCH, &uri, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No fields to update");
}

#[tokio::test]
async fn malformed_json_gets_the_error_envelope() {
    let router = router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Invalid JSON payload");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn validation_failures_list_the_offending_fields() {
    let router = router();
    let (status, json) = send(
        &router,
        Method::POST,
        "/tables",
        Some(json!({ "number_of_guests": 0, "table_number": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert!(json["errors"].get("number_of_guests").is_some());
}

#[tokio::test]
async fn order_update_with_unknown_table_changes_nothing() {
    let router = router();
    let table = create(
        &router,
        "/tables",
        json!({ "number_of_guests": 4, "table_number": 7 }),
    )
    .await;
    let order = create(&router, "/orders", json!({ "table_id": table["table_id"] })).await;
    let uri = format!("/orders/{}", order["order_id"].as_str().unwrap());

    let (status, json) = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "table_id": "missing" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Table not found");

    let (_, json) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(json["data"]["table_id"], table["table_id"]);
    assert_eq!(json["data"]["updated_at"], order["updated_at"]);
}

#[tokio::test]
async fn invoices_are_returned_with_their_order_details() {
    let router = router();
    let menu_id = active_menu(&router).await;
    let table = create(
        &router,
        "/tables",
        json!({ "number_of_guests": 2, "table_number": 12 }),
    )
    .await;
    let order = create(&router, "/orders", json!({ "table_id": table["table_id"] })).await;
    for (name, price, quantity) in [("Suya", 6.0, 2), ("Zobo", 1.25, 3)] {
        let food = create(
            &router,
            "/foods",
            json!({
                "name": name,
                "price": price,
                "food_image": "item.png",
                "menu_id": menu_id,
            }),
        )
        .await;
        create(
            &router,
            "/orderItems",
            json!({
                "order_id": order["order_id"],
                "food_id": food["food_id"],
                "quantity": quantity,
                "unit_price": price,
            }),
        )
        .await;
    }
    let invoice = create(&router, "/invoices", json!({ "order_id": order["order_id"] })).await;
    assert_eq!(invoice["payment_status"], "PENDING");

    let uri = format!("/invoices/{}", invoice["invoice_id"].as_str().unwrap());
    let (status, json) = send(&router, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let details = json["data"]["order_details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details.iter().all(|detail| detail["food_details"].is_object()));
    assert_eq!(json["data"]["table_number"], 12);
    assert_eq!(json["data"]["payment_due"], 15.75);

    let uri = format!("/orderItems-order/{}", order["order_id"].as_str().unwrap());
    let (status, json) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

fn sign_up_body(email: &str, phone: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Obi",
        "email": email,
        "password": "hunter22",
        "phone": phone,
    })
}

#[tokio::test]
async fn sign_up_rejects_duplicate_emails() {
    let router = router();
    let user = create(
        &router,
        "/users/signup",
        sign_up_body("Ada@Example.com", "+2348000000001"),
    )
    .await;
    assert_eq!(user["user"]["email"], "ada@example.com");
    assert!(user["user"].get("password").is_none());
    assert!(user["token"].is_string());

    let (status, json) = send(
        &router,
        Method::POST,
        "/users/signup",
        Some(sign_up_body("ada@example.com", "+2348000000002")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Email already in use");
}

#[tokio::test]
async fn sign_up_rejects_duplicate_phone_numbers() {
    let router = router();
    create(
        &router,
        "/users/signup",
        sign_up_body("ada@example.com", "+2348000000001"),
    )
    .await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/users/signup",
        Some(sign_up_body("obi@example.com", "+2348000000001")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Phone number already in use");
}

#[tokio::test]
async fn login_checks_the_password() {
    let router = router();
    create(
        &router,
        "/users/signup",
        sign_up_body("ada@example.com", "+2348000000001"),
    )
    .await;

    let (status, json) = send(
        &router,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "ada@example.com", "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["token"].is_string());
    assert!(json["data"]["refresh_token"].is_string());

    let (status, json) = send(
        &router,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "ada@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid email or password");

    let (status, _) = send(
        &router,
        Method::POST,
        "/users/login",
        Some(json!({ "email": "nobody@example.com", "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
