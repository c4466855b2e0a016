//! Database queries for packages and bookings

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Booking, NewBooking, Package, PackageRow, DEFAULT_BOOKING_STATUS};

/// Package list filters
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    /// Case-insensitive substring of the destination
    pub destination: Option<String>,
    /// Exact package type
    pub package_type: Option<String>,
}

/// List packages matching the filter
pub async fn list_packages(pool: &SqlitePool, filter: &PackageFilter) -> Result<Vec<Package>> {
    let rows = sqlx::query_as::<_, PackageRow>(
        r#"
        SELECT id, name, destination, description, price, duration, image, type
        FROM package
        WHERE (?1 IS NULL OR LOWER(destination) LIKE '%' || LOWER(?1) || '%')
          AND (?2 IS NULL OR type = ?2)
        ORDER BY id
        "#,
    )
    .bind(filter.destination.as_deref())
    .bind(filter.package_type.as_deref())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Package::from).collect())
}

/// Get a package by id
pub async fn get_package(pool: &SqlitePool, id: i64) -> Result<Option<Package>> {
    let row = sqlx::query_as::<_, PackageRow>(
        r#"
        SELECT id, name, destination, description, price, duration, image, type
        FROM package
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Package::from))
}

/// Record a booking with the default status
pub async fn insert_booking(pool: &SqlitePool, booking: &NewBooking) -> Result<Booking> {
    let created_at = Utc::now();

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO booking (
            package_id, name, email, phone, travellers,
            taxi_type, room_type, hotel_type, persons, status, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(booking.package_id)
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(&booking.phone)
    .bind(booking.travellers)
    .bind(booking.taxi_type.as_deref())
    .bind(booking.room_type.as_deref())
    .bind(booking.hotel_type.as_deref())
    .bind(booking.persons)
    .bind(DEFAULT_BOOKING_STATUS)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(Booking {
        id,
        package_id: booking.package_id,
        name: booking.name.clone(),
        email: booking.email.clone(),
        phone: booking.phone.clone(),
        travellers: booking.travellers,
        taxi_type: booking.taxi_type.clone(),
        room_type: booking.room_type.clone(),
        hotel_type: booking.hotel_type.clone(),
        persons: booking.persons,
        status: DEFAULT_BOOKING_STATUS.to_string(),
        created_at,
    })
}

