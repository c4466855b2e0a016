//! Repository seam between handlers/services and the data store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Activity, Booking, City, Flight, Hotel, NewBooking, Package};
use crate::pricing::queries as catalog;

use super::queries::{self, PackageFilter};

/// Read access to the travel catalog plus booking writes.
#[async_trait]
pub trait TravelRepository: Send + Sync {
    async fn find_city_by_name(&self, name: &str) -> Result<Option<City>>;

    async fn list_flights_for_city(&self, city_id: i64) -> Result<Vec<Flight>>;

    /// Ordered by id
    async fn list_hotels_for_city(&self, city_id: i64) -> Result<Vec<Hotel>>;

    async fn list_activities_for_city(&self, city_id: i64) -> Result<Vec<Activity>>;

    async fn find_hotel_by_name(&self, city_id: i64, name: &str) -> Result<Option<Hotel>>;

    async fn list_packages(&self, filter: &PackageFilter) -> Result<Vec<Package>>;

    async fn get_package(&self, id: i64) -> Result<Option<Package>>;

    async fn insert_booking(&self, booking: &NewBooking) -> Result<Booking>;
}

/// SQLite-backed repository
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TravelRepository for SqliteRepository {
    async fn find_city_by_name(&self, name: &str) -> Result<Option<City>> {
        catalog::find_city_by_name(&self.pool, name).await
    }

    async fn list_flights_for_city(&self, city_id: i64) -> Result<Vec<Flight>> {
        catalog::list_flights_for_city(&self.pool, city_id).await
    }

    async fn list_hotels_for_city(&self, city_id: i64) -> Result<Vec<Hotel>> {
        catalog::list_hotels_for_city(&self.pool, city_id).await
    }

    async fn list_activities_for_city(&self, city_id: i64) -> Result<Vec<Activity>> {
        catalog::list_activities_for_city(&self.pool, city_id).await
    }

    async fn find_hotel_by_name(&self, city_id: i64, name: &str) -> Result<Option<Hotel>> {
        catalog::find_hotel_by_name(&self.pool, city_id, name).await
    }

    async fn list_packages(&self, filter: &PackageFilter) -> Result<Vec<Package>> {
        queries::list_packages(&self.pool, filter).await
    }

    async fn get_package(&self, id: i64) -> Result<Option<Package>> {
        queries::get_package(&self.pool, id).await
    }

    async fn insert_booking(&self, booking: &NewBooking) -> Result<Booking> {
        queries::insert_booking(&self.pool, booking).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{memory_pool, seed};
    use rust_decimal_macros::dec;

    async fn seeded_repo() -> SqliteRepository {
        let pool = memory_pool().await.unwrap();
        seed::seed_demo_data(&pool).await.unwrap();
        SqliteRepository::new(pool)
    }

    #[tokio::test]
    async fn test_find_city_by_exact_name() {
        let repo = seeded_repo().await;
        let goa = repo.find_city_by_name("Goa").await.unwrap();
        assert_eq!(goa.map(|c| c.name), Some("Goa".to_string()));
        assert!(repo.find_city_by_name("goa").await.unwrap().is_none());
        assert!(repo.find_city_by_name("Manali").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_hotels_ordered_by_id() {
        let repo = seeded_repo().await;
        let goa = repo.find_city_by_name("Goa").await.unwrap().unwrap();
        let hotels = repo.list_hotels_for_city(goa.id).await.unwrap();
        assert_eq!(hotels.len(), 3);
        assert!(hotels.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(hotels[0].name, "Radisson Goa Candolim - Holidays Selections");
        assert_eq!(hotels[0].price, dec!(5000));
    }

    #[tokio::test]
    async fn test_activities_keep_tags_and_rates() {
        let repo = seeded_repo().await;
        let goa = repo.find_city_by_name("Goa").await.unwrap().unwrap();
        let activities = repo.list_activities_for_city(goa.id).await.unwrap();
        let north = activities
            .iter()
            .find(|a| a.name == "NORTH GOA TOUR SIC")
            .unwrap();
        assert_eq!(north.kind, crate::models::ActivityKind::Tour);
        assert!(north.rates[0].is_some());
    }

    #[tokio::test]
    async fn test_find_hotel_by_name_within_city() {
        let repo = seeded_repo().await;
        let goa = repo.find_city_by_name("Goa").await.unwrap().unwrap();
        let taj = repo
            .find_hotel_by_name(goa.id, "Taj Exotica Resort & Spa")
            .await
            .unwrap();
        assert_eq!(taj.map(|h| h.price), Some(dec!(8000)));

        let cochin = repo.find_city_by_name("Cochin").await.unwrap().unwrap();
        let none = repo
            .find_hotel_by_name(cochin.id, "Taj Exotica Resort & Spa")
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_list_packages_filters() {
        let repo = seeded_repo().await;

        let all = repo.list_packages(&PackageFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let goa = repo
            .list_packages(&PackageFilter {
                destination: Some("go".to_string()),
                package_type: None,
            })
            .await
            .unwrap();
        assert_eq!(goa.len(), 1);
        assert_eq!(goa[0].destination, "Goa");

        let honeymoon = repo
            .list_packages(&PackageFilter {
                destination: None,
                package_type: Some("Honeymoon".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(honeymoon.len(), 1);
        assert_eq!(honeymoon[0].destination, "Kerala");

        let none = repo
            .list_packages(&PackageFilter {
                destination: Some("Goa".to_string()),
                package_type: Some("Adventure".to_string()),
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_insert_booking_defaults_to_confirmed() {
        let repo = seeded_repo().await;
        let package = repo.list_packages(&PackageFilter::default()).await.unwrap()[0].clone();

        let booking = repo
            .insert_booking(&NewBooking {
                package_id: package.id,
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9999999999".to_string(),
                travellers: 2,
                taxi_type: Some("Sedan".to_string()),
                room_type: None,
                hotel_type: Some("4 Star".to_string()),
                persons: 2,
            })
            .await
            .unwrap();

        assert!(booking.id > 0);
        assert_eq!(booking.status, "CONFIRMED");

        let stored: (String, i64) =
            sqlx::query_as("SELECT status, persons FROM booking WHERE id = ?")
                .bind(booking.id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        assert_eq!(stored, ("CONFIRMED".to_string(), 2));
    }
}
