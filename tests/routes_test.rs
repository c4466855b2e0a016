use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use holiday_planner::config::Config;
use holiday_planner::db::{memory_pool, seed};
use holiday_planner::{routes, AppState};

async fn seeded_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await.unwrap();
    seed::seed_demo_data(&pool).await.unwrap();
    let app = routes::router(AppState::with_pool(pool.clone(), Config::default()));
    (app, pool)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = seeded_app().await;
    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn hotel_price_by_exact_name() {
    let (app, _) = seeded_app().await;

    let (status, json) = get_json(&app, "/api/hotel_price?city=Goa&name=Holiday%20Inn%20Resort%20Goa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["price"], 6500);
    assert!(json["price"].is_number());

    let (_, json) = get_json(&app, "/api/hotel_price?city=Goa&name=Unknown").await;
    assert!(json["price"].is_null());

    let (_, json) = get_json(&app, "/api/hotel_price?name=Holiday%20Inn%20Resort%20Goa").await;
    assert!(json["price"].is_null());
}

#[tokio::test]
async fn hotels_without_city_are_empty() {
    let (app, _) = seeded_app().await;

    let (status, json) = get_json(&app, "/api/hotels?city=Goa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hotels"].as_array().unwrap().len(), 3);

    let (status, json) = get_json(&app, "/api/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["city"], "");
    assert!(json["hotels"].as_array().unwrap().is_empty());

    let (status, json) = get_json(&app, "/api/hotels?city=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["hotels"].as_array().unwrap().is_empty());

    let (_, json) = get_json(&app, "/api/hotels?city=Atlantis").await;
    assert_eq!(json["city"], "Atlantis");
    assert!(json["hotels"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn package_list_carries_both_totals() {
    let (app, _) = seeded_app().await;

    let (status, json) = get_json(&app, "/api/packages?destination=goa").await;
    assert_eq!(status, StatusCode::OK);
    let packages = json.as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["name"], "Goa Beach Escape");
    assert_eq!(packages[0]["with_flight"], "35000");
    assert_eq!(packages[0]["without_flight"], "21500");

    let (_, json) = get_json(&app, "/api/packages?type=Adventure").await;
    let packages = json.as_array().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0]["with_flight"], "15999");
}

#[tokio::test]
async fn itinerary_json_for_goa() {
    let (app, _) = seeded_app().await;

    let (status, json) = get_json(&app, "/api/package/1/itinerary?departure=2024-06-14").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["num_days"], 4);
    assert_eq!(json["total"], "35000");
    assert_eq!(json["display_total"], "35000");
    assert_eq!(json["city_resolved"], true);
    assert_eq!(json["day_labels"][0], "14 Jun, Fri");
    assert_eq!(json["day_labels"][3], "17 Jun, Mon");
    assert_eq!(json["item_prices"]["flight-day1"], "6500");
    assert_eq!(json["hotel_names"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn itinerary_display_total_uses_carried_price() {
    let (app, _) = seeded_app().await;

    let (_, json) = get_json(&app, "/api/package/1/itinerary?initial_price=41000").await;
    assert_eq!(json["total"], "35000");
    assert_eq!(json["display_total"], "41000");
}

#[tokio::test]
async fn itinerary_without_city_uses_flat_price() {
    let (app, _) = seeded_app().await;

    let (status, json) = get_json(&app, "/api/package/2/itinerary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["city_resolved"], false);
    assert_eq!(json["total"], "15999");
    assert_eq!(json["hotel_names"][0], "No Hotel");
}

#[tokio::test]
async fn unknown_package_is_not_found() {
    let (app, _) = seeded_app().await;

    let (status, _) = get(&app, "/package/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/package/999/itinerary").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn zero_day_package_is_unprocessable() {
    let (app, pool) = seeded_app().await;
    let id = sqlx::query("INSERT INTO package (name, destination, price, duration) VALUES ('Broken', 'Goa', 1000, '0D/0N')")
        .execute(&pool)
        .await
        .unwrap()
        .last_insert_rowid();

    let (status, _) = get(&app, &format!("/api/package/{id}/itinerary")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = get(&app, &format!("/package/{id}")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = get(&app, "/packages?destination=Goa").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Broken"));
}

#[tokio::test]
async fn html_pages_render() {
    let (app, _) = seeded_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("New Delhi"));

    let (status, body) = get(&app, "/packages").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Goa Beach Escape"));
    assert!(body.contains("35000"));
    assert!(body.contains("21500"));

    let (status, body) = get(&app, "/package/1?departure=2024-06-14").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("NORTH GOA TOUR SIC"));
    assert!(body.contains("Radisson Goa Candolim"));
    assert!(body.contains("35000"));
}

#[tokio::test]
async fn booking_is_recorded_as_confirmed() {
    let (app, pool) = seeded_app().await;

    let (status, body) = get(&app, "/book/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Goa Beach Escape"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/book/1")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Asha&email=asha%40example.com&phone=98765&persons=2&travellers=x"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let (status, persons, travellers): (String, i64, i64) =
        sqlx::query_as("SELECT status, persons, travellers FROM booking WHERE package_id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status, "CONFIRMED");
    assert_eq!(persons, 2);
    assert_eq!(travellers, 1);
}

#[tokio::test]
async fn booking_without_contact_details_is_rejected() {
    let (app, _) = seeded_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/book/1")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Asha&email=&phone=98765"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
