//! Inputs and keys for the itinerary calculator.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::{Activity, City, Flight, Hotel};

/// Everything stored for one city, loaded fresh for each request.
#[derive(Debug, Clone)]
pub struct CityInventory {
    pub city: City,
    pub flights: Vec<Flight>,
    /// Ordered by id; only the first one is priced
    pub hotels: Vec<Hotel>,
    /// Insertion order
    pub activities: Vec<Activity>,
}

/// Whether the onward and return flights are charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightOption {
    #[default]
    With,
    Without,
}

impl FlightOption {
    /// `without` (any case) turns flights off; anything else keeps them.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("without") => FlightOption::Without,
            _ => FlightOption::With,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightOption::With => "with",
            FlightOption::Without => "without",
        }
    }
}

/// Who is travelling and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyOptions {
    pub from_city: String,
    /// Always >= 1
    pub persons: u32,
    pub flight_option: FlightOption,
}

impl PartyOptions {
    pub fn new(from_city: impl Into<String>, persons: u32, flight_option: FlightOption) -> Self {
        Self {
            from_city: from_city.into(),
            persons: persons.max(1),
            flight_option,
        }
    }

    pub fn with_flight_option(&self, flight_option: FlightOption) -> Self {
        Self {
            flight_option,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKind {
    Flight,
    Hotel,
    Activity,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Flight => "flight",
            SlotKind::Hotel => "hotel",
            SlotKind::Activity => "activity",
        }
    }
}

/// Day-indexed slot key, rendered as `flight-day1`, `hotel-day2`, ...
///
/// Orders by day first, then kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub day: u32,
    pub kind: SlotKind,
}

impl SlotKey {
    pub fn flight(day: u32) -> Self {
        Self { day, kind: SlotKind::Flight }
    }

    pub fn hotel(day: u32) -> Self {
        Self { day, kind: SlotKind::Hotel }
    }

    pub fn activity(day: u32) -> Self {
        Self { day, kind: SlotKind::Activity }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-day{}", self.kind.as_str(), self.day)
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
