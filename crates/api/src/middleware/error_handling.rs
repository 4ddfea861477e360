//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! shopbook API. It maps domain-specific errors to appropriate HTTP
//! status codes and the `{"success": false, "message": ...}` JSON
//! envelope every failure response uses.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with shopbook's typed error enum.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shopbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`BookingError`] instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses.
///
/// Persistence failures are logged with their full source chain before
/// the generic client-facing message goes out; nothing internal leaks.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::BookingNotFound(_) | BookingError::ShopNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            BookingError::Unauthorized { .. } | BookingError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            BookingError::QuotaExceeded(_) => StatusCode::BAD_REQUEST,
            BookingError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let BookingError::Database { message, source } = &self.0 {
            tracing::error!(error = ?source, "{message}");
        }

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "success": false, "message": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BookingError to AppError.
///
/// This implementation allows using `?` operator with functions that
/// return `Result<T, BookingError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Maps a BookingError to an HTTP response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
