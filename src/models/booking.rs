//! Booking submissions

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Status stored on every new booking
pub const DEFAULT_BOOKING_STATUS: &str = "CONFIRMED";

/// Booking from booking
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: i64,
    pub package_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub travellers: i64,
    pub taxi_type: Option<String>,
    pub room_type: Option<String>,
    pub hotel_type: Option<String>,
    pub persons: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A validated booking ready to insert
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub package_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub travellers: i64,
    pub taxi_type: Option<String>,
    pub room_type: Option<String>,
    pub hotel_type: Option<String>,
    pub persons: i64,
}
