//! Catalog models: cities, packages, flights, hotels and activities.
//!
//! Rows are decoded with sqlx's FromRow and converted into domain types that
//! carry money as `Decimal`.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Case-insensitive equality used for station, city and activity names.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// City from city
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Package from package
#[derive(Debug, Clone, FromRow)]
pub struct PackageRow {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    pub price: i64,
    pub duration: Option<String>,
    pub image: Option<String>,
    #[sqlx(rename = "type")]
    pub package_type: Option<String>,
}

/// A sellable holiday product tied to one destination and duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    /// Flat price shown when the destination has no city record
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// `"<N>D/<M>N"`
    pub duration: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub package_type: Option<String>,
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            destination: row.destination,
            description: row.description,
            price: Decimal::from(row.price),
            duration: row.duration,
            image: row.image,
            package_type: row.package_type,
        }
    }
}

/// Flight from flight
#[derive(Debug, Clone, FromRow)]
pub struct FlightRow {
    pub id: i64,
    pub city_id: i64,
    pub source_station: Option<String>,
    pub destination_station: Option<String>,
    pub price: i64,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub id: i64,
    pub city_id: i64,
    pub source_station: Option<String>,
    pub destination_station: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub details: Option<String>,
}

impl Flight {
    /// True when the flight leaves `from` and lands at `to`.
    ///
    /// Both stations must be present and non-empty.
    pub fn connects(&self, from: &str, to: &str) -> bool {
        match (self.source_station.as_deref(), self.destination_station.as_deref()) {
            (Some(src), Some(dst)) if !src.is_empty() && !dst.is_empty() => {
                eq_ignore_case(src, from) && eq_ignore_case(dst, to)
            }
            _ => false,
        }
    }
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Self {
            id: row.id,
            city_id: row.city_id,
            source_station: row.source_station,
            destination_station: row.destination_station,
            price: Decimal::from(row.price),
            details: row.details,
        }
    }
}

/// Hotel from hotel
#[derive(Debug, Clone, FromRow)]
pub struct HotelRow {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub price: i64,
    pub address: Option<String>,
    pub room_category: Option<String>,
    pub meal: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    /// Price per night
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub address: Option<String>,
    pub room_category: Option<String>,
    pub meal: Option<String>,
    pub details: Option<String>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self {
            id: row.id,
            city_id: row.city_id,
            name: row.name,
            price: Decimal::from(row.price),
            address: row.address,
            room_category: row.room_category,
            meal: row.meal,
            details: row.details,
        }
    }
}

/// Where an activity lands in the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Always on day 1
    Pickup,
    /// Always on the last day
    Drop,
    /// Spread over the middle days
    Tour,
    /// Untagged sightseeing, spread like tours
    Activity,
}

impl ActivityKind {
    /// Parse the stored type tag. Missing or unknown tags are generic activities.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("pickup") => ActivityKind::Pickup,
            Some("drop") => ActivityKind::Drop,
            Some("tour") => ActivityKind::Tour,
            _ => ActivityKind::Activity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Pickup => "pickup",
            ActivityKind::Drop => "drop",
            ActivityKind::Tour => "tour",
            ActivityKind::Activity => "activity",
        }
    }

    /// Tours and untagged activities go to the middle days.
    pub fn is_sightseeing(&self) -> bool {
        matches!(self, ActivityKind::Tour | ActivityKind::Activity)
    }
}

/// Activity from activity
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub activity_type: Option<String>,
    pub price: Option<i64>,
    pub rate_1: Option<i64>,
    pub rate_2: Option<i64>,
    pub rate_3: Option<i64>,
    pub rate_4: Option<i64>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: i64,
    pub city_id: i64,
    pub name: String,
    pub kind: ActivityKind,
    /// Flat price, used when no rate tier matches the party size
    #[serde(with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    /// Per-person rates for parties of 1 to 4
    pub rates: [Option<Decimal>; 4],
    pub details: Option<String>,
}

impl Activity {
    /// Per-person unit rate for a party of `persons`.
    ///
    /// Picks `rate_<persons>` for parties of 1 to 4, then the flat price, then zero.
    pub fn rate_for(&self, persons: u32) -> Decimal {
        let tier = match persons {
            1..=4 => self.rates[(persons - 1) as usize],
            _ => None,
        };
        tier.or(self.price).unwrap_or(Decimal::ZERO)
    }

    /// Charged amount for the whole party: unit rate times party size.
    pub fn line_price(&self, persons: u32) -> Decimal {
        self.rate_for(persons) * Decimal::from(persons)
    }
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id,
            city_id: row.city_id,
            name: row.name,
            kind: ActivityKind::from_tag(row.activity_type.as_deref()),
            price: row.price.map(Decimal::from),
            rates: [row.rate_1, row.rate_2, row.rate_3, row.rate_4].map(|r| r.map(Decimal::from)),
            details: row.details,
        }
    }
}
