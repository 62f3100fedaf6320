//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),
    #[error("invalid DATABASE_URI: {0}")]
    DatabaseUri(String),
}

/// Why an incoming account payload could not be turned into an `AccountForm`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field {0} must be a string")]
    InvalidType(&'static str),
    #[error("date_joined is not a valid ISO date: '{0}'")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Content-Type must be {0}")]
    UnsupportedMediaType(&'static str),
    #[error("{0}")]
    MethodNotAllowed(&'static str),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid account data: {0}")]
    InvalidPayload(PayloadError),
    #[error("attribute error: {0}")]
    Attribute(PayloadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("store: {0}")]
    Store(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Attribute(_) => StatusCode::CONFLICT,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Config(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::NotFound(msg) | AppError::MethodNotAllowed(msg) => error_body(msg, None),
            AppError::UnsupportedMediaType(_) => error_body(&self.to_string(), None),
            AppError::BadRequest(msg) => error_body("bad request", Some(msg.clone())),
            AppError::InvalidPayload(e) => error_body("bad request", Some(e.to_string())),
            AppError::Attribute(e) => error_body("attribute error", Some(e.to_string())),
            AppError::Db(sqlx::Error::RowNotFound) => error_body("id not found", None),
            AppError::Db(_) | AppError::Config(_) | AppError::Store(_) => {
                tracing::error!(error = %self, "store failure");
                error_body("internal server error", None)
            }
        };
        (status, Json(body)).into_response()
    }
}
