use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use museum_tours_client::config::{ApiConfig, AppConfig, Config};
use museum_tours_client::error::ApiError;
use museum_tours_client::models::{
    CreateBookingRequest, EntityId, PaymentMethod, Tour, UpdateProfileRequest,
};
use museum_tours_client::services::{admin, auth, bookings, profile, tours};
use museum_tours_client::ApiContext;

fn test_ctx(base_url: &str) -> Arc<ApiContext> {
    let config = Config {
        app: AppConfig {
            rust_log: "info".to_string(),
        },
        api: ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        },
    };
    ApiContext::new(config).unwrap()
}

fn booking_request(tour_id: i64, tickets: u32, method: PaymentMethod) -> CreateBookingRequest {
    CreateBookingRequest {
        tour_id: EntityId::Int(tour_id),
        date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        time: "14:00".to_string(),
        number_of_tickets: tickets,
        total_price: 75.0,
        special_requests: String::new(),
        payment_method: method,
    }
}

#[tokio::test]
async fn login_stores_token_and_returns_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_partial_json(json!({"email": "ana@example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "message": "Welcome back!",
                "token": "tok-1"
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    let credentials = auth::Credentials::new("ana@example.com", "secret-1");
    let message = auth::login(&ctx, &credentials).await.unwrap();

    assert_eq!(message, "Welcome back!");
    assert!(ctx.session.is_authenticated());
    assert_eq!(ctx.session.token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn register_does_not_store_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Account created"})),
        )
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    let credentials = auth::Credentials::new("ana@example.com", "secret-1");
    let message = auth::register(&ctx, &credentials).await.unwrap();

    assert_eq!(message, "Account created");
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
async fn validation_failure_never_reaches_the_network() {
    let server = MockServer::start().await;
    let ctx = test_ctx(&server.uri());

    let invalid = auth::Credentials::new("broken", "secret-1");
    assert!(matches!(
        auth::login(&ctx, &invalid).await,
        Err(ApiError::Validation(_))
    ));

    let short = auth::Credentials::new("ana@example.com", "123");
    assert!(matches!(
        auth::register(&ctx, &short).await,
        Err(ApiError::Validation(_))
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn tour_listing_accepts_both_collection_shapes() {
    let records = json!([
        {"id": 1, "name": "Harbor Walk", "guide": "Ana"},
        {"id": 2, "title": "Old Town", "guideName": "Leo"}
    ]);

    let bare = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records.clone()))
        .mount(&bare)
        .await;

    let wrapped = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tours": records})))
        .mount(&wrapped)
        .await;

    let from_bare = tours::list_tours(&test_ctx(&bare.uri())).await.unwrap();
    let from_wrapped = tours::list_tours(&test_ctx(&wrapped.uri())).await.unwrap();

    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_bare.len(), 2);
    assert_eq!(from_bare[1].title.as_deref(), Some("Old Town"));
}

#[tokio::test]
async fn booking_flow_creates_then_pays() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/bookings"))
        .and(body_partial_json(json!({
            "tourId": 3,
            "numberOfTickets": 3,
            "totalPrice": 75.0,
            "paymentMethod": "cash"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"bookingId": 77})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/bookings/77/pay-cash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "paid"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");

    let request = booking_request(3, 3, PaymentMethod::Cash);
    let booking_id = bookings::book_and_pay(&ctx, &request).await.unwrap();
    assert_eq!(booking_id, EntityId::Int(77));
}

#[tokio::test]
async fn payment_failure_does_not_fail_the_booking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/bookings"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 8})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/bookings/8/pay-points"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "wallet down"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");

    let request = booking_request(3, 3, PaymentMethod::Points);
    let booking_id = bookings::book_and_pay(&ctx, &request).await.unwrap();
    assert_eq!(booking_id, EntityId::Int(8));
}

#[tokio::test]
async fn cancel_booking_deletes_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/bookings/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "cancelled"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");
    bookings::cancel_booking(&ctx, &EntityId::Int(42))
        .await
        .unwrap();
}

#[tokio::test]
async fn expired_session_is_cleared_when_listing_bookings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/bookings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Expired"})))
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("stale");

    match bookings::list_bookings(&ctx).await {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Expired");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
async fn change_password_mismatch_never_reaches_the_network() {
    let server = MockServer::start().await;
    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");

    assert!(matches!(
        profile::change_password(&ctx, "old", "new-secret", "other").await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        profile::change_password(&ctx, "old", "123", "123").await,
        Err(ApiError::Validation(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_profile_refetches_authoritative_copy() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/users/profile"))
        .and(body_partial_json(json!({"name": "Ana Petrova"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Updated"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "ana@example.com",
            "fullName": "Ana Petrova",
            "points": 240
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");

    let request = UpdateProfileRequest {
        email: "ana@example.com".to_string(),
        name: "Ana Petrova".to_string(),
        phone: String::new(),
        country: String::new(),
        bio: String::new(),
    };
    let refreshed = profile::update_profile(&ctx, &request).await.unwrap();
    assert_eq!(refreshed.full_name.as_deref(), Some("Ana Petrova"));
    assert_eq!(refreshed.points, Some(240));
}

#[tokio::test]
async fn admin_delete_sends_id_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/tours"))
        .and(body_partial_json(json!({"id": "66f1a2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    ctx.session.set_token("tok-1");
    admin::delete_tour(&ctx, &EntityId::Str("66f1a2".to_string()))
        .await
        .unwrap();
}

#[tokio::test]
async fn tour_detail_falls_back_to_known_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tours/9"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    let known = Tour {
        id: Some(EntityId::Int(9)),
        name: Some("Harbor Walk".to_string()),
        ..Tour::default()
    };

    let shown = tours::load_tour_details(&ctx, &known).await;
    assert_eq!(shown, known);
}

#[tokio::test]
async fn museum_info_is_a_public_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "City Museum",
            "openingHours": "09:00-18:00"
        })))
        .mount(&server)
        .await;

    let ctx = test_ctx(&server.uri());
    let info = admin::fetch_museum_info(&ctx).await.unwrap();
    assert_eq!(info.name.as_deref(), Some("City Museum"));

    // Без токена заголовок авторизации не отправляется
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}
