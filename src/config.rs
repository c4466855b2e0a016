//! Runtime configuration loaded from the environment

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// Bind address
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Origin city used when a request does not name one
    pub default_from_city: String,
    /// Insert the demo catalog on startup when the database is empty
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:holidays.db".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_from_city: "New Delhi".to_string(),
            seed_demo_data: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            database_url: non_empty("DATABASE_URL").unwrap_or(defaults.database_url),
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            default_from_city: non_empty("DEFAULT_FROM_CITY").unwrap_or(defaults.default_from_city),
            seed_demo_data: non_empty("SEED_DEMO_DATA")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.seed_demo_data),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.database_url, "sqlite:holidays.db");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_from_city, "New Delhi");
        assert!(!config.seed_demo_data);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
            ("DEFAULT_FROM_CITY", "Cochin"),
            ("SEED_DEMO_DATA", "true"),
        ]));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_from_city, "Cochin");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("SEED_DEMO_DATA", "maybe"),
            ("DEFAULT_FROM_CITY", "   "),
        ]));
        assert_eq!(config.port, 3000);
        assert!(!config.seed_demo_data);
        assert_eq!(config.default_from_city, "New Delhi");
    }
}
