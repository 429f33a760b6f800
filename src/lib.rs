//! # Roster
//!
//! A student roster service built with Rust, Axum, and SQLite. Students can
//! be listed page by page, created, edited, viewed and deleted, one at a
//! time or all at once.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── roster-core/     # AppError, pagination, serde helpers
//! ├── roster-config/   # Environment-driven configuration
//! ├── roster-db/       # Pool setup and migrations
//! ├── roster-models/   # Student records, forms, view models, field rules
//! └── roster-cli/      # Seeding and maintenance commands
//! src/
//! ├── modules/
//! │   └── students/    # controller, service, router, error
//! └── utils/           # Tracing helpers
//! ```
//!
//! The students module follows the usual layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic and queries
//! - `model.rs`: Re-exports of the shared models
//! - `router.rs`: Axum router configuration
//! - `error.rs`: Service error taxonomy
//!
//! ## Changing a student's id
//!
//! The id is the primary key and may be edited. Such an edit inserts the
//! record under the new id and deletes the old row inside one transaction,
//! so either both happen or neither does. An id already in use is reported
//! on the form and nothing is written.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://roster.db
//! cargo run
//! ```
//!
//! API documentation is served at `http://localhost:3000/scalar` and
//! Prometheus metrics at `http://localhost:9090/metrics`.
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Tracing subscriber and request logging
//! - [`metrics`]: Prometheus metrics
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use roster_config;
pub use roster_core;
pub use roster_db;
pub use roster_models;
