use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::templates::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::ConstraintViolation(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ConstraintViolation(detail)
            }
            _ => Self::Database(err),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to a visitor
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) => "Database error occurred".to_string(),
            Self::NotFound(msg) | Self::ConstraintViolation(msg) | Self::Validation(msg) => {
                msg.clone()
            }
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                "An unexpected error occurred".to_string()
            }
        }
    }

    /// Server-side failures get logged; caller mistakes only get traced at debug
    pub fn log(&self) {
        match self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Configuration(msg) => tracing::error!("Configuration error: {}", msg),
            Self::Internal(msg) => tracing::error!("Internal error: {}", msg),
            Self::Other(e) => tracing::error!("Unexpected error: {}", e),
            Self::NotFound(_) | Self::ConstraintViolation(_) | Self::Validation(_) => {
                tracing::debug!("Request rejected: {}", self)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = error_page(status, &self.public_message());

        (status, Html(body.into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
