//! Database queries for the pricing catalog.
//!
//! Read-only lookups of a city's flights, hotels and activities.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Activity, ActivityRow, City, Flight, FlightRow, Hotel, HotelRow};

/// Find a city by exact name
pub async fn find_city_by_name(pool: &SqlitePool, name: &str) -> Result<Option<City>, AppError> {
    let city = sqlx::query_as::<_, City>(
        r#"
        SELECT id, name
        FROM city
        WHERE name = ?
        LIMIT 1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(city)
}

/// All flights stored for a city, in insertion order
pub async fn list_flights_for_city(pool: &SqlitePool, city_id: i64) -> Result<Vec<Flight>, AppError> {
    let rows = sqlx::query_as::<_, FlightRow>(
        r#"
        SELECT id, city_id, source_station, destination_station, price, details
        FROM flight
        WHERE city_id = ?
        ORDER BY id
        "#,
    )
    .bind(city_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Flight::from).collect())
}

/// All hotels stored for a city, ordered by id
pub async fn list_hotels_for_city(pool: &SqlitePool, city_id: i64) -> Result<Vec<Hotel>, AppError> {
    let rows = sqlx::query_as::<_, HotelRow>(
        r#"
        SELECT id, city_id, name, price, address, room_category, meal, details
        FROM hotel
        WHERE city_id = ?
        ORDER BY id
        "#,
    )
    .bind(city_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Hotel::from).collect())
}

/// All activities stored for a city, in insertion order
pub async fn list_activities_for_city(
    pool: &SqlitePool,
    city_id: i64,
) -> Result<Vec<Activity>, AppError> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        r#"
        SELECT id, city_id, name, type, price, rate_1, rate_2, rate_3, rate_4, details
        FROM activity
        WHERE city_id = ?
        ORDER BY id
        "#,
    )
    .bind(city_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Activity::from).collect())
}

/// Find a hotel by exact name within a city
pub async fn find_hotel_by_name(
    pool: &SqlitePool,
    city_id: i64,
    name: &str,
) -> Result<Option<Hotel>, AppError> {
    let row = sqlx::query_as::<_, HotelRow>(
        r#"
        SELECT id, city_id, name, price, address, room_category, meal, details
        FROM hotel
        WHERE city_id = ? AND name = ?
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(city_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Hotel::from))
}
