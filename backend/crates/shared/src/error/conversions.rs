//! Error conversions - HTTP response rendering for [`AppError`]

use super::app_error::AppError;

/// Error body: `{"error": "<status>", "message": "<text>"}`
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "error": self.status_code().to_string(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
