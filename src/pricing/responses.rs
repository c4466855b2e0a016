//! Response DTOs for the JSON endpoints.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Hotel, Package};

use super::itinerary::ItineraryQuote;
use super::services::PackageSummary;

/// Response for a single hotel price lookup; the nightly price is a plain JSON number
#[derive(Debug, Serialize)]
pub struct HotelPriceResponse {
    pub price: Option<i64>,
}

impl From<Option<Decimal>> for HotelPriceResponse {
    /// Hotel prices are stored in whole rupees
    fn from(price: Option<Decimal>) -> Self {
        Self {
            price: price.and_then(|p| p.trunc().to_i64()),
        }
    }
}

/// Response for the hotels of a city
#[derive(Debug, Serialize)]
pub struct HotelListResponse {
    pub city: String,
    pub hotels: Vec<Hotel>,
}

/// Package with both list totals
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    #[serde(flatten)]
    pub package: Package,
    #[serde(with = "rust_decimal::serde::str")]
    pub with_flight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub without_flight: Decimal,
}

impl From<PackageSummary> for PackageResponse {
    fn from(summary: PackageSummary) -> Self {
        Self {
            package: summary.package,
            with_flight: summary.totals.with_flight,
            without_flight: summary.totals.without_flight,
        }
    }
}

/// Response for a priced itinerary
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub package_id: i64,
    pub destination: String,
    pub from_city: String,
    pub departure: String,
    pub day_labels: Vec<String>,
    #[serde(flatten)]
    pub quote: ItineraryQuote,
    /// Total to display: the carried-over price when given, else the computed total
    #[serde(with = "rust_decimal::serde::str")]
    pub display_total: Decimal,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
