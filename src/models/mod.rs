//! Domain models

mod booking;
mod catalog;

pub use booking::{Booking, NewBooking, DEFAULT_BOOKING_STATUS};
pub use catalog::{
    eq_ignore_case, Activity, ActivityKind, ActivityRow, City, Flight, FlightRow, Hotel, HotelRow,
    Package, PackageRow,
};
