pub mod check;
pub mod health;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for requests that match no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
