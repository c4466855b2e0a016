//! Holiday package browsing, itinerary pricing and booking.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use config::Config;
use db::{SqliteRepository, TravelRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TravelRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TravelRepository>, config: Config) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }

    /// State backed by a sqlite pool
    pub fn with_pool(pool: sqlx::SqlitePool, config: Config) -> Self {
        Self::new(Arc::new(SqliteRepository::new(pool)), config)
    }
}
