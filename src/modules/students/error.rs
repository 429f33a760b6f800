//! Outcomes of student operations that are not a success.
//!
//! User-correctable failures ([`StudentError::Validation`],
//! [`StudentError::DuplicateKey`], [`StudentError::NoChange`]) are shown on
//! the redisplayed form. [`StudentError::NotFound`] and storage faults end the
//! request with an error response instead.

use anyhow::anyhow;
use roster_core::AppError;
use roster_models::students::{DUPLICATE_ID_MESSAGE, FormErrors, ID_FIELD, NO_CHANGES_MESSAGE};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("validation failed")]
    Validation(FormErrors),

    #[error("A student with id {0} already exists")]
    DuplicateKey(i64),

    #[error("{}", NO_CHANGES_MESSAGE)]
    NoChange,

    #[error("Student not found")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StudentError {
    /// Splits the error into errors for the redisplayed form, or a terminal
    /// [`AppError`] when no form should be shown.
    pub fn into_form_errors(self) -> Result<FormErrors, AppError> {
        match self {
            Self::Validation(errors) => Ok(errors),
            Self::DuplicateKey(_) => Ok(FormErrors::for_field(ID_FIELD, DUPLICATE_ID_MESSAGE)),
            Self::NoChange => Ok(FormErrors::for_form(NO_CHANGES_MESSAGE)),
            other => Err(other.into_app_error()),
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            Self::NotFound(_) => AppError::not_found(anyhow!("Student not found")),
            Self::Database(err) => AppError::database(err),
            Self::Validation(errors) => {
                let message = errors
                    .fields
                    .values()
                    .flatten()
                    .chain(errors.form.iter())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::unprocessable(anyhow!("{}", message))
            }
            Self::DuplicateKey(_) => AppError::unprocessable(anyhow!("{}", DUPLICATE_ID_MESSAGE)),
            Self::NoChange => AppError::unprocessable(anyhow!("{}", NO_CHANGES_MESSAGE)),
        }
    }
}
