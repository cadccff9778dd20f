use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use geoaddr_core::address::ValidationError;
use geoaddr_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Validation failures become 422 with field-level detail. Body extraction
/// failures keep the rejection's own status. Repository failures map through
/// [`repository_error_to_status_code`]. Anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(validation) = self.0.downcast_ref::<ValidationError>() {
            tracing::warn!(error = %validation, "Rejected request");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response();
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            tracing::warn!(
                error = %rejection,
                status = %rejection.status(),
                "Rejected request body"
            );
            return (
                rejection.status(),
                Json(json!({ "detail": rejection.body_text() })),
            )
                .into_response();
        }

        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(error = %self.0, status = %status_code, "Application error");

        (status_code, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
