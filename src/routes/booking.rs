//! Booking form handlers

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::db::TravelRepository;
use crate::error::{AppError, Result};
use crate::models::NewBooking;
use crate::pricing::requests::parse_persons;
use crate::AppState;

/// Query parameters carried into the booking form
#[derive(Debug, Default, Deserialize)]
pub struct BookingPageQuery {
    #[serde(default)]
    pub persons: Option<String>,
}

/// Submitted booking form
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub travellers: Option<String>,
    #[serde(default)]
    pub taxi_type: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub hotel_type: Option<String>,
    #[serde(default)]
    pub persons: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl BookingForm {
    /// Validate into a booking for `package_id`.
    ///
    /// Name, email and phone are required; counts fall back to 1.
    pub fn into_new_booking(self, package_id: i64) -> Result<NewBooking> {
        let travellers = i64::from(parse_persons(self.travellers.as_deref()));
        let persons = i64::from(parse_persons(self.persons.as_deref()));

        let name = trimmed(self.name).ok_or_else(|| AppError::BadRequest("Name is required".to_string()))?;
        let email = trimmed(self.email).ok_or_else(|| AppError::BadRequest("Email is required".to_string()))?;
        let phone = trimmed(self.phone).ok_or_else(|| AppError::BadRequest("Phone is required".to_string()))?;

        Ok(NewBooking {
            package_id,
            name,
            email,
            phone,
            travellers,
            taxi_type: trimmed(self.taxi_type),
            room_type: trimmed(self.room_type),
            hotel_type: trimmed(self.hotel_type),
            persons,
        })
    }
}

/// Booking form template
#[derive(Template)]
#[template(path = "booking.html")]
struct BookingTemplate {
    package_id: i64,
    package_name: String,
    destination: String,
    duration: String,
    persons: u32,
}

/// Booking form page
pub async fn form(
    State(state): State<AppState>,
    Path(package_id): Path<i64>,
    Query(query): Query<BookingPageQuery>,
) -> Result<Html<String>> {
    let package = state
        .repo
        .get_package(package_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let template = BookingTemplate {
        package_id: package.id,
        package_name: package.name,
        destination: package.destination,
        duration: package.duration.unwrap_or_default(),
        persons: parse_persons(query.persons.as_deref()),
    };

    Ok(Html(template.render()?))
}

/// Record a booking and return to the homepage
pub async fn submit(
    State(state): State<AppState>,
    Path(package_id): Path<i64>,
    Form(form): Form<BookingForm>,
) -> Result<Redirect> {
    let package = state
        .repo
        .get_package(package_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let booking = state.repo.insert_booking(&form.into_new_booking(package.id)?).await?;
    tracing::info!(
        "Booking {} recorded for package {} ({} persons)",
        booking.id,
        booking.package_id,
        booking.persons
    );

    Ok(Redirect::to("/"))
}
