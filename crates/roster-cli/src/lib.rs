//! # Roster CLI
//!
//! Seeding and maintenance utilities for the student roster.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_cli::seeder::seed_students;
//!
//! let inserted = seed_students(&pool, 25).await?;
//! ```

pub mod seeder;
