//! Day-by-day itinerary pricing.
//!
//! Combines a package with the stored flights, hotels and activities of its
//! destination city. Pure: every input is passed in, nothing is mutated.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Activity, ActivityKind, Flight, Hotel, Package};

use super::calculators::{parse_num_days, sum_slots};
use super::distribution::Distribution;
use super::models::{CityInventory, FlightOption, PartyOptions, SlotKey};
use super::services::PricingError;

/// Hotel name shown for nights with no hotel on file.
pub const NO_HOTEL: &str = "No Hotel";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightDetail {
    pub source_station: String,
    pub destination_station: String,
    pub details: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelDetail {
    pub name: String,
    pub address: Option<String>,
    pub room_category: Option<String>,
    pub meal: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDetail {
    pub name: String,
    pub kind: ActivityKind,
    pub rates: [Option<Decimal>; 4],
    pub details: Option<String>,
    /// Unit rate chosen for the party size
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_rate: Decimal,
    /// Unit rate times party size
    #[serde(with = "rust_decimal::serde::str")]
    pub line_price: Decimal,
}

/// Human-readable content of one itinerary day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDetail {
    pub day: u32,
    pub flight: Option<FlightDetail>,
    /// Hotel for the night that starts on this day; never set on the last day
    pub hotel: Option<HotelDetail>,
    pub activities: Vec<ActivityDetail>,
}

/// Priced itinerary for one package and party.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryQuote {
    pub num_days: u32,
    pub persons: u32,
    pub flight_option: FlightOption,
    /// False when the destination has no city record and the flat price applies
    pub city_resolved: bool,
    pub item_prices: BTreeMap<SlotKey, Decimal>,
    pub days: Vec<DayDetail>,
    /// One entry per night
    pub hotel_names: Vec<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// Price a package for a party.
///
/// `inventory` is `None` when the destination has no city record; the quote then
/// carries the package's flat price and placeholder details only.
pub fn calculate_itinerary(
    package: &Package,
    inventory: Option<&CityInventory>,
    party: &PartyOptions,
) -> Result<ItineraryQuote, PricingError> {
    let num_days = parse_num_days(package.duration.as_deref())?;
    let persons = party.persons.max(1);

    let Some(inventory) = inventory else {
        tracing::debug!(
            "No city record for '{}', using flat price {}",
            package.destination,
            package.price
        );
        return Ok(ItineraryQuote {
            num_days,
            persons,
            flight_option: party.flight_option,
            city_resolved: false,
            item_prices: BTreeMap::new(),
            days: (1..=num_days).map(empty_day).collect(),
            hotel_names: vec![NO_HOTEL.to_string(); (num_days - 1) as usize],
            total: package.price,
        });
    };

    let mut item_prices = BTreeMap::new();
    let mut days: Vec<DayDetail> = (1..=num_days).map(empty_day).collect();
    let mut hotel_names = Vec::with_capacity((num_days - 1) as usize);

    // Flights: onward on day 1, return on the last day, nothing in between
    let onward = find_flight(&inventory.flights, &party.from_city, &package.destination);
    let inbound = find_flight(&inventory.flights, &package.destination, &party.from_city);
    for day in 1..=num_days {
        let flight = if day == 1 {
            onward
        } else if day == num_days {
            inbound
        } else {
            None
        };
        let detail = flight.map(|f| flight_detail(f, party.flight_option));
        let price = detail.as_ref().map(|d| d.price).unwrap_or(Decimal::ZERO);
        if flight.is_none() && (day == 1 || day == num_days) {
            tracing::debug!("No flight for day {} of {}", day, package.destination);
        }
        item_prices.insert(SlotKey::flight(day), price);
        days[(day - 1) as usize].flight = detail;
    }

    // Hotels: the first hotel on file, every night
    let hotel = inventory.hotels.first();
    if hotel.is_none() && num_days > 1 {
        tracing::debug!("No hotel on file for {}", package.destination);
    }
    for night in 1..num_days {
        let price = hotel.map(|h| h.price).unwrap_or(Decimal::ZERO);
        item_prices.insert(SlotKey::hotel(night), price);
        hotel_names.push(hotel.map(|h| h.name.clone()).unwrap_or_else(|| NO_HOTEL.to_string()));
        days[(night - 1) as usize].hotel = hotel.map(hotel_detail);
    }

    // Activities: per-day plan, priced per person
    let plan = Distribution::select(&package.destination, num_days).assign(&inventory.activities, num_days);
    for day in 1..=num_days {
        let details: Vec<ActivityDetail> = plan
            .day(day)
            .iter()
            .map(|a| activity_detail(a, persons))
            .collect();
        let price: Decimal = details.iter().map(|d| d.line_price).sum();
        item_prices.insert(SlotKey::activity(day), price);
        days[(day - 1) as usize].activities = details;
    }

    let total = sum_slots(&item_prices);

    Ok(ItineraryQuote {
        num_days,
        persons,
        flight_option: party.flight_option,
        city_resolved: true,
        item_prices,
        days,
        hotel_names,
        total,
    })
}

/// Totals with and without flights for the package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageTotals {
    #[serde(with = "rust_decimal::serde::str")]
    pub with_flight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub without_flight: Decimal,
}

/// Run the calculator once per flight option.
pub fn calculate_package_totals(
    package: &Package,
    inventory: Option<&CityInventory>,
    party: &PartyOptions,
) -> Result<PackageTotals, PricingError> {
    let with = calculate_itinerary(package, inventory, &party.with_flight_option(FlightOption::With))?;
    let without =
        calculate_itinerary(package, inventory, &party.with_flight_option(FlightOption::Without))?;

    Ok(PackageTotals {
        with_flight: with.total,
        without_flight: without.total,
    })
}

fn empty_day(day: u32) -> DayDetail {
    DayDetail {
        day,
        flight: None,
        hotel: None,
        activities: Vec::new(),
    }
}

fn find_flight<'a>(flights: &'a [Flight], from: &str, to: &str) -> Option<&'a Flight> {
    flights.iter().find(|f| f.connects(from, to))
}

fn flight_detail(flight: &Flight, option: FlightOption) -> FlightDetail {
    FlightDetail {
        source_station: flight.source_station.clone().unwrap_or_default(),
        destination_station: flight.destination_station.clone().unwrap_or_default(),
        details: flight.details.clone(),
        price: match option {
            FlightOption::With => flight.price,
            FlightOption::Without => Decimal::ZERO,
        },
    }
}

fn hotel_detail(hotel: &Hotel) -> HotelDetail {
    HotelDetail {
        name: hotel.name.clone(),
        address: hotel.address.clone(),
        room_category: hotel.room_category.clone(),
        meal: hotel.meal.clone(),
        price: hotel.price,
    }
}

fn activity_detail(activity: &Activity, persons: u32) -> ActivityDetail {
    ActivityDetail {
        name: activity.name.clone(),
        kind: activity.kind,
        rates: activity.rates,
        details: activity.details.clone(),
        unit_rate: activity.rate_for(persons),
        line_price: activity.line_price(persons),
    }
}
