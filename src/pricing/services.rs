//! Pricing service functions with repository access.
//!
//! Each call loads the destination's catalog fresh and hands it to the pure
//! calculator in [`super::itinerary`].

use rust_decimal::Decimal;

use crate::db::TravelRepository;
use crate::error::Result;
use crate::models::{Hotel, Package};

use super::itinerary::{calculate_itinerary, calculate_package_totals, ItineraryQuote, PackageTotals};
use super::models::{CityInventory, PartyOptions};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid package duration '{0}': expected at least one day")]
    InvalidDuration(String),
}

/// Package with its two list-view totals
#[derive(Debug, Clone)]
pub struct PackageSummary {
    pub package: Package,
    pub totals: PackageTotals,
}

/// Load everything stored for a destination, or `None` if it has no city record.
pub async fn load_inventory<R>(repo: &R, destination: &str) -> Result<Option<CityInventory>>
where
    R: TravelRepository + ?Sized,
{
    let Some(city) = repo.find_city_by_name(destination).await? else {
        return Ok(None);
    };

    let flights = repo.list_flights_for_city(city.id).await?;
    let hotels = repo.list_hotels_for_city(city.id).await?;
    let activities = repo.list_activities_for_city(city.id).await?;

    Ok(Some(CityInventory {
        city,
        flights,
        hotels,
        activities,
    }))
}

/// Price one package for a party.
pub async fn quote_package<R>(repo: &R, package: &Package, party: &PartyOptions) -> Result<ItineraryQuote>
where
    R: TravelRepository + ?Sized,
{
    let inventory = load_inventory(repo, &package.destination).await?;
    let quote = calculate_itinerary(package, inventory.as_ref(), party)?;

    tracing::debug!(
        "Quoted package {} for {} ({} days, {} persons, flights {}): {}",
        package.id,
        party.from_city,
        quote.num_days,
        quote.persons,
        party.flight_option.as_str(),
        quote.total
    );

    Ok(quote)
}

/// Totals with and without flights for every package in the list.
///
/// A package whose duration cannot be laid out shows its flat price in both columns.
pub async fn summarize_packages<R>(
    repo: &R,
    packages: Vec<Package>,
    party: &PartyOptions,
) -> Result<Vec<PackageSummary>>
where
    R: TravelRepository + ?Sized,
{
    let mut summaries = Vec::with_capacity(packages.len());

    for package in packages {
        let inventory = load_inventory(repo, &package.destination).await?;
        let totals = match calculate_package_totals(&package, inventory.as_ref(), party) {
            Ok(totals) => totals,
            Err(e) => {
                tracing::warn!("Package {}: {}; showing flat price", package.id, e);
                PackageTotals {
                    with_flight: package.price,
                    without_flight: package.price,
                }
            }
        };
        summaries.push(PackageSummary { package, totals });
    }

    Ok(summaries)
}

/// Nightly price of a hotel, matched by exact name within a city.
pub async fn hotel_price<R>(repo: &R, city_name: &str, hotel_name: &str) -> Result<Option<Decimal>>
where
    R: TravelRepository + ?Sized,
{
    let Some(city) = repo.find_city_by_name(city_name).await? else {
        return Ok(None);
    };

    let hotel = repo.find_hotel_by_name(city.id, hotel_name).await?;
    Ok(hotel.map(|h| h.price))
}

/// Hotels of a city; empty when the city is unknown.
pub async fn hotels_in_city<R>(repo: &R, city_name: &str) -> Result<Vec<Hotel>>
where
    R: TravelRepository + ?Sized,
{
    match repo.find_city_by_name(city_name).await? {
        Some(city) => repo.list_hotels_for_city(city.id).await,
        None => Ok(Vec::new()),
    }
}
