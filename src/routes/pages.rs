//! HTML page handlers: home, package list and itinerary

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use chrono::Local;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::db::TravelRepository;
use crate::error::{AppError, Result};
use crate::pricing::itinerary::{ActivityDetail, DayDetail};
use crate::pricing::requests::{ItineraryQuery, PackageListQuery};
use crate::pricing::{day_labels, services, FlightOption, SlotKey};
use crate::AppState;

/// Home template
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    default_from_city: String,
    today: String,
}

/// One card in the package list
pub struct PackageCard {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub duration: String,
    pub image: String,
    pub package_type: String,
    pub with_flight: String,
    pub without_flight: String,
}

/// Package list template
#[derive(Template)]
#[template(path = "packages.html")]
struct PackagesTemplate {
    packages: Vec<PackageCard>,
    destination: String,
    package_type: String,
    from_city: String,
    persons: u32,
    has_packages: bool,
}

pub struct ActivityView {
    pub name: String,
    pub kind: &'static str,
    pub details: String,
    pub unit_rate: String,
    pub line_price: String,
}

/// One itinerary day, flattened for the template
pub struct DayView {
    pub day: u32,
    pub label: String,
    pub has_flight: bool,
    pub flight_route: String,
    pub flight_details: String,
    pub flight_price: String,
    pub has_night: bool,
    pub hotel_name: String,
    pub hotel_info: String,
    pub hotel_price: String,
    pub activities: Vec<ActivityView>,
    pub has_activities: bool,
    pub activity_price: String,
}

/// Itinerary template
#[derive(Template)]
#[template(path = "package_detail.html")]
struct PackageDetailTemplate {
    package_id: i64,
    package_name: String,
    destination: String,
    duration: String,
    description: String,
    from_city: String,
    departure: String,
    persons: u32,
    with_flights: bool,
    num_days: u32,
    city_resolved: bool,
    days: Vec<DayView>,
    total: String,
}

/// Homepage handler
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let template = HomeTemplate {
        default_from_city: state.config.default_from_city.clone(),
        today: Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    Ok(Html(template.render()?))
}

/// Package listing with both totals per package
pub async fn packages(
    State(state): State<AppState>,
    Query(query): Query<PackageListQuery>,
) -> Result<Html<String>> {
    let party = query.party(&state.config.default_from_city);
    let packages = state.repo.list_packages(&query.filter()).await?;
    let summaries = services::summarize_packages(state.repo.as_ref(), packages, &party).await?;

    let cards: Vec<PackageCard> = summaries
        .into_iter()
        .map(|s| PackageCard {
            id: s.package.id,
            name: s.package.name,
            destination: s.package.destination,
            duration: s.package.duration.unwrap_or_default(),
            image: s.package.image.unwrap_or_default(),
            package_type: s.package.package_type.unwrap_or_default(),
            with_flight: s.totals.with_flight.to_string(),
            without_flight: s.totals.without_flight.to_string(),
        })
        .collect();

    let template = PackagesTemplate {
        has_packages: !cards.is_empty(),
        packages: cards,
        destination: query.destination.clone().unwrap_or_default(),
        package_type: query.package_type.clone().unwrap_or_default(),
        from_city: party.from_city.clone(),
        persons: party.persons,
    };

    Ok(Html(template.render()?))
}

/// Day-by-day itinerary for one package
pub async fn package_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ItineraryQuery>,
) -> Result<Html<String>> {
    let package = state.repo.get_package(id).await?.ok_or(AppError::NotFound)?;
    let party = query.party(&state.config.default_from_city);
    let departure = query.departure_date(Local::now().date_naive());

    let quote = services::quote_package(state.repo.as_ref(), &package, &party).await?;
    let labels = day_labels(departure, quote.num_days);

    let days = quote
        .days
        .iter()
        .map(|day| {
            let label = labels
                .get((day.day - 1) as usize)
                .cloned()
                .unwrap_or_else(|| format!("Day {}", day.day));
            day_view(day, label, &quote.item_prices, quote.hotel_names.get((day.day - 1) as usize))
        })
        .collect();

    let total = query.initial_price().unwrap_or(quote.total);

    let template = PackageDetailTemplate {
        package_id: package.id,
        package_name: package.name,
        destination: package.destination,
        duration: package.duration.unwrap_or_default(),
        description: package.description.unwrap_or_default(),
        from_city: party.from_city,
        departure: departure.format("%Y-%m-%d").to_string(),
        persons: party.persons,
        with_flights: party.flight_option == FlightOption::With,
        num_days: quote.num_days,
        city_resolved: quote.city_resolved,
        days,
        total: total.to_string(),
    };

    Ok(Html(template.render()?))
}

fn slot_price(prices: &BTreeMap<SlotKey, Decimal>, key: SlotKey) -> String {
    prices.get(&key).copied().unwrap_or_default().to_string()
}

fn day_view(
    day: &DayDetail,
    label: String,
    prices: &BTreeMap<SlotKey, Decimal>,
    night_hotel: Option<&String>,
) -> DayView {
    let (flight_route, flight_details) = match &day.flight {
        Some(f) => (
            format!("{} to {}", f.source_station, f.destination_station),
            f.details.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let hotel_info = day
        .hotel
        .as_ref()
        .map(|h| {
            [h.address.as_deref(), h.room_category.as_deref(), h.meal.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .unwrap_or_default();

    let activities: Vec<ActivityView> = day.activities.iter().map(activity_view).collect();

    DayView {
        day: day.day,
        label,
        has_flight: day.flight.is_some(),
        flight_route,
        flight_details,
        flight_price: slot_price(prices, SlotKey::flight(day.day)),
        has_night: night_hotel.is_some(),
        hotel_name: night_hotel.cloned().unwrap_or_default(),
        hotel_info,
        hotel_price: slot_price(prices, SlotKey::hotel(day.day)),
        has_activities: !activities.is_empty(),
        activities,
        activity_price: slot_price(prices, SlotKey::activity(day.day)),
    }
}

fn activity_view(activity: &ActivityDetail) -> ActivityView {
    ActivityView {
        name: activity.name.clone(),
        kind: activity.kind.as_str(),
        details: activity.details.clone().unwrap_or_default(),
        unit_rate: activity.unit_rate.to_string(),
        line_price: activity.line_price.to_string(),
    }
}
