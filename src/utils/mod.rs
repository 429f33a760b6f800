//! Utility modules for the Roster service.
//!
//! - [`tracing`]: Audit logging and error logging helpers

pub mod tracing;
