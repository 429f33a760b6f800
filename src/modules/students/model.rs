//! Student data models and view models.
//!
//! This module re-exports student models from the `roster-models` crate
//! together with the pagination query type used by the listing.

// Re-export all student models from the shared crate
pub use roster_core::pagination::PageQuery;
pub use roster_models::students::*;
