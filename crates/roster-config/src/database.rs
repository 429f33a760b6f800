//! Database configuration.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://roster.db`)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
//!
//! # Connection String Format
//!
//! ```text
//! sqlite://path/to/file.db
//! sqlite::memory:
//! ```

use std::env;

use crate::parse_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://roster.db".to_string()),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lookup;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::from_lookup(lookup(&[]));
        assert_eq!(config.url, "sqlite://roster.db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]));
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn test_zero_connections_is_raised_to_one() {
        let config = DatabaseConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")]));
        assert_eq!(config.max_connections, 1);
    }
}
