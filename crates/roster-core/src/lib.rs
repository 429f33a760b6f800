//! # Roster Core
//!
//! Core types, errors, and utilities for the Roster service.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page window math for paginated listings
//! - [`serde`]: Lenient deserialization helpers for query strings and form bodies
//!
//! # Example
//!
//! ```ignore
//! use roster_core::errors::AppError;
//! use roster_core::pagination::PageWindow;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! let window = PageWindow::new(Some(3), Some(3), 7);
//! assert_eq!(window.offset(), 6);
//! ```

pub mod errors;
pub mod pagination;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{ALLOWED_PAGE_SIZES, DEFAULT_PAGE_SIZE, PageQuery, PageWindow};
