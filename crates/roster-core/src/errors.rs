//! Application error type.
//!
//! [`AppError`] pairs an HTTP status with an [`anyhow::Error`] and renders as
//! a `{"error": "..."}` JSON body. Handlers return `Result<_, AppError>` and
//! use `?` on anything convertible into `anyhow::Error`, which maps to a
//! `500 Internal Server Error` unless a more specific constructor is used.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.error, status = %self.status.as_u16(), "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.error.to_string(),
        });

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(
            AppError::not_found(anyhow!("x")).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unprocessable(anyhow!("x")).status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::database(anyhow!("x")).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_converts_to_internal() {
        let err: AppError = std::io::Error::other("disk gone").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), "disk gone");
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::not_found(anyhow!("Student not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Student not found");
    }
}
