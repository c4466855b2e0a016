//! Itinerary pricing for holiday packages.
//!
//! Combines a package's duration with the flights, hotels and activities
//! stored for its destination into a day-by-day priced itinerary.

pub mod calculators;
pub mod distribution;
pub mod itinerary;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{day_labels, parse_num_days, DEFAULT_NUM_DAYS};
pub use distribution::Distribution;
pub use itinerary::{calculate_itinerary, calculate_package_totals, ItineraryQuote, PackageTotals};
pub use models::{CityInventory, FlightOption, PartyOptions, SlotKey};
pub use services::{PackageSummary, PricingError};
