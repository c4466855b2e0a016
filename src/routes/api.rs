//! JSON endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;

use crate::db::TravelRepository;
use crate::error::{AppError, Result};
use crate::pricing::requests::{HotelListQuery, HotelPriceQuery, ItineraryQuery, PackageListQuery};
use crate::pricing::responses::{
    HealthResponse, HotelListResponse, HotelPriceResponse, ItineraryResponse, PackageResponse,
};
use crate::pricing::{day_labels, services};
use crate::AppState;

/// Nightly price of a named hotel; `null` when either name is missing or unknown
pub async fn hotel_price(
    State(state): State<AppState>,
    Query(query): Query<HotelPriceQuery>,
) -> Result<Json<HotelPriceResponse>> {
    let price = match query.lookup() {
        Some((city, name)) => services::hotel_price(state.repo.as_ref(), city, name).await?,
        None => None,
    };

    Ok(Json(HotelPriceResponse::from(price)))
}

/// Hotels of a city; a missing city answers like an unknown one
pub async fn hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelListQuery>,
) -> Result<Json<HotelListResponse>> {
    let city = query.city.map(|c| c.trim().to_string()).unwrap_or_default();

    let hotels = if city.is_empty() {
        Vec::new()
    } else {
        services::hotels_in_city(state.repo.as_ref(), &city).await?
    };
    Ok(Json(HotelListResponse { city, hotels }))
}

/// Filtered packages with both totals
pub async fn packages(
    State(state): State<AppState>,
    Query(query): Query<PackageListQuery>,
) -> Result<Json<Vec<PackageResponse>>> {
    let party = query.party(&state.config.default_from_city);
    let packages = state.repo.list_packages(&query.filter()).await?;
    let summaries = services::summarize_packages(state.repo.as_ref(), packages, &party).await?;

    Ok(Json(summaries.into_iter().map(PackageResponse::from).collect()))
}

/// Priced itinerary for one package
pub async fn itinerary(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ItineraryQuery>,
) -> Result<Json<ItineraryResponse>> {
    let package = state.repo.get_package(id).await?.ok_or(AppError::NotFound)?;
    let party = query.party(&state.config.default_from_city);
    let departure = query.departure_date(Local::now().date_naive());

    let quote = services::quote_package(state.repo.as_ref(), &package, &party).await?;
    let display_total = query.initial_price().unwrap_or(quote.total);

    Ok(Json(ItineraryResponse {
        package_id: package.id,
        destination: package.destination,
        from_city: party.from_city,
        departure: departure.format("%Y-%m-%d").to_string(),
        day_labels: day_labels(departure, quote.num_days),
        quote,
        display_total,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
