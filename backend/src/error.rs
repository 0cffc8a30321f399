//! Request-path error type.
//!
//! Every handler returns `Result<HttpResponse, AppError>`; the
//! `ResponseError` impl maps each failure to its HTTP status, so the
//! distinction between a malformed id, a missing document and a storage
//! outage survives all the way to the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The path carried something that is not a valid document id.
    #[error("'{0}' is not a valid plant id")]
    InvalidId(String),

    /// A form payload failed boundary validation.
    #[error("{0}")]
    Validation(String),

    /// No plant exists under the given id.
    #[error("No plant found with id {0}")]
    NotFound(String),

    /// The template registry could not render a page.
    #[error("Failed to render page: {0}")]
    Template(#[from] tera::Error),

    /// The store accepted an insert but did not hand back an object id.
    #[error("The database did not return an id for the new document")]
    MissingInsertId,

    /// The driver reported a failure talking to the store.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::MissingInsertId => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_mistakes_map_to_400() {
        assert_eq!(
            AppError::InvalidId("basil".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation("The plant name cannot be empty".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_documents_map_to_404() {
        let err = AppError::NotFound("64b0c5f2a1d2e3f4a5b6c7d8".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn render_failures_map_to_500() {
        let err = AppError::Template(tera::Error::msg("missing template"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::MissingInsertId.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_the_message() {
        let err = AppError::InvalidId("basil".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
