//! # Roster Models
//!
//! Domain models, forms, and view models for the Roster service.
//!
//! # Modules
//!
//! - [`students`]: The student entity, its input forms and view models
//! - [`validation`]: Field rules shared by every student form
//!
//! # Example
//!
//! ```ignore
//! use roster_models::students::StudentForm;
//! use validator::Validate;
//!
//! let form = StudentForm {
//!     id: None,
//!     name: "Ada Lovelace".to_string(),
//!     email: "ada@gmail.com".to_string(),
//!     mobile: "9876543210".to_string(),
//! };
//! assert!(form.validate().is_ok());
//! ```

pub mod students;
pub mod validation;

pub use students::{
    EditStudentForm, FormErrors, Student, StudentForm, StudentFormView, StudentsIndexView,
};
