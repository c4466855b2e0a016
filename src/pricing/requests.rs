//! Query-string DTOs for pricing pages and endpoints.
//!
//! Every field arrives as an optional string so that malformed values fall
//! back to defaults instead of rejecting the request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::db::PackageFilter;

use super::models::{FlightOption, PartyOptions};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Party size from a query value: a positive integer, else 1.
pub fn parse_persons(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Departure date from `YYYY-MM-DD`, else `today`.
pub fn parse_departure(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
        .unwrap_or(today)
}

/// Price carried over from a previous page; only positive integers count.
pub fn parse_initial_price(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|p| *p > 0)
        .map(Decimal::from)
}

/// Query for the package list
#[derive(Debug, Default, Deserialize)]
pub struct PackageListQuery {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default, rename = "type")]
    pub package_type: Option<String>,
    #[serde(default)]
    pub from_city: Option<String>,
    #[serde(default)]
    pub persons: Option<String>,
}

impl PackageListQuery {
    pub fn filter(&self) -> PackageFilter {
        PackageFilter {
            destination: non_empty(&self.destination).map(str::to_string),
            package_type: non_empty(&self.package_type).map(str::to_string),
        }
    }

    pub fn party(&self, default_from_city: &str) -> PartyOptions {
        PartyOptions::new(
            non_empty(&self.from_city).unwrap_or(default_from_city),
            parse_persons(self.persons.as_deref()),
            FlightOption::With,
        )
    }
}

/// Query for a package itinerary
#[derive(Debug, Default, Deserialize)]
pub struct ItineraryQuery {
    #[serde(default)]
    pub from_city: Option<String>,
    #[serde(default)]
    pub departure: Option<String>,
    #[serde(default)]
    pub flight_option: Option<String>,
    #[serde(default)]
    pub persons: Option<String>,
    #[serde(default)]
    pub initial_price: Option<String>,
}

impl ItineraryQuery {
    pub fn party(&self, default_from_city: &str) -> PartyOptions {
        PartyOptions::new(
            non_empty(&self.from_city).unwrap_or(default_from_city),
            parse_persons(self.persons.as_deref()),
            FlightOption::parse(self.flight_option.as_deref()),
        )
    }

    pub fn departure_date(&self, today: NaiveDate) -> NaiveDate {
        parse_departure(self.departure.as_deref(), today)
    }

    pub fn initial_price(&self) -> Option<Decimal> {
        parse_initial_price(self.initial_price.as_deref())
    }
}

/// Query for a single hotel price
#[derive(Debug, Default, Deserialize)]
pub struct HotelPriceQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl HotelPriceQuery {
    /// Both names, untrimmed, when present and non-empty
    pub fn lookup(&self) -> Option<(&str, &str)> {
        match (self.city.as_deref(), self.name.as_deref()) {
            (Some(city), Some(name)) if !city.is_empty() && !name.is_empty() => Some((city, name)),
            _ => None,
        }
    }
}

/// Query for the hotels of a city
#[derive(Debug, Default, Deserialize)]
pub struct HotelListQuery {
    #[serde(default)]
    pub city: Option<String>,
}
