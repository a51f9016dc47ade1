use crate::errors::AppError;
use crate::utils::escape_html;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidDate(_) | AppError::InvalidTimestamp(_) => StatusCode::BAD_REQUEST,
            AppError::Http(_) | AppError::Remote { .. } => StatusCode::BAD_GATEWAY,
            AppError::Unsupported { .. } => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {self}");
        }

        let body = format!(
            "<!doctype html><html><head><title>Error</title></head><body><h1>{}</h1><p>{}</p><p><a href=\"/\">Back</a></p></body></html>",
            status,
            escape_html(&self.to_string())
        );

        (status, Html(body)).into_response()
    }
}
