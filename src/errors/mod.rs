use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error types for the wiki application
#[derive(Debug)]
pub enum WikiError {
    Io(io::Error),
    PageNotFound { title: String },
    InvalidTitle,
    Template(String),
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            // A title outside the route allow-list is indistinguishable
            // from a page that does not exist.
            WikiError::InvalidTitle => (StatusCode::NOT_FOUND, "Not found").into_response(),
            WikiError::PageNotFound { title } => (
                StatusCode::NOT_FOUND,
                format!("No page named '{}'", title),
            )
                .into_response(),
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            WikiError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}
