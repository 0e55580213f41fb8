use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Uniform response wrapper of the to-do routes.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self { data: Some(data), error: None }
    }
}

/// Errors of the to-do routes.
/// Implements `IntoResponse` so handlers can return `Result<T, TodoError>`.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("Text is required")]
    TextRequired,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = match self {
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::TextRequired => StatusCode::BAD_REQUEST,
        };
        log::debug!("{status}: {self}");

        let body = Json(Envelope::<()> { data: None, error: Some(self.to_string()) });
        (status, body).into_response()
    }
}
