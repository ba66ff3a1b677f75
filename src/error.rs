//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Write rejected by a backend rule: unique email, required column, non-empty name.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::ConstraintViolation(_) => "constraint_violation",
            AppError::BackendUnavailable(_) => "backend_unavailable",
            AppError::Db(_) => "database_error",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    AppError::ConstraintViolation(db.message().to_string())
                }
                _ => AppError::Db(e),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => AppError::BackendUnavailable(e.to_string()),
            _ => AppError::Db(e),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Every failure is a server-side failure: constraint violations are not
/// translated into client errors.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), error = %self, "request failed");
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_backend_unavailable() {
        assert!(matches!(
            AppError::from(sqlx::Error::PoolTimedOut),
            AppError::BackendUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(sqlx::Error::PoolClosed),
            AppError::BackendUnavailable(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(AppError::from(sqlx::Error::Io(io)), AppError::BackendUnavailable(_)));
    }

    #[test]
    fn other_sqlx_errors_stay_database_errors() {
        let e = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(e, AppError::Db(_)));
        assert_eq!(e.code(), "database_error");
    }

    #[tokio::test]
    async fn constraint_violation_maps_to_server_error() {
        let resp = AppError::ConstraintViolation("duplicate key".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "constraint_violation");
        assert!(body["error"]["message"].as_str().unwrap().contains("duplicate key"));
    }

    #[test]
    fn config_error_code() {
        let e: AppError = ConfigError::Invalid {
            key: "BIND_ADDRESS",
            message: "not an address".into(),
        }
        .into();
        assert_eq!(e.code(), "config_error");
        assert_eq!(e.to_string(), "invalid value for BIND_ADDRESS: not an address");
    }
}
