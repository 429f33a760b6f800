//! # Roster Config
//!
//! Configuration types for the Roster service.
//!
//! Every structure is loaded from environment variables with sensible
//! defaults, so a bare `cargo run` works against a local SQLite file:
//!
//! - [`server`]: HTTP listener address
//! - [`database`]: Database URL and pool size
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`observability`]: Metrics listener and log file settings
//!
//! Each type also exposes a `from_lookup` constructor taking a variable
//! lookup function, which keeps parsing testable without touching the
//! process environment.
//!
//! # Example
//!
//! ```ignore
//! use roster_config::{CorsConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env();
//! let cors = CorsConfig::from_env();
//! let observability = ObservabilityConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod observability;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;

/// Parses a variable, falling back to `default` when unset or invalid.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a boolean flag; anything but `false`/`0` counts as enabled.
pub(crate) fn flag_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(default)
}
