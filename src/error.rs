use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use strum_macros::{AsRefStr, Display as StrumDisplay};

/// Which store rule rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintKind {
    DuplicateEmail,
    MissingField,
}

/// Errors raised by [`crate::db::Store`].
///
/// The display form is the raw message (the SQLite text for engine errors),
/// which is what the HTTP layer hands back to the client.
#[derive(Debug, derive_more::Display)]
pub enum StoreError {
    #[display(fmt = "{}", message)]
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },
    #[display(fmt = "{}", _0)]
    Fault(sqlx::Error),
}

impl StoreError {
    pub fn missing_field(field: &str) -> Self {
        StoreError::ConstraintViolation {
            kind: ConstraintKind::MissingField,
            message: format!("Missing required field: {}", field),
        }
    }

    pub fn kind(&self) -> Option<ConstraintKind> {
        match self {
            StoreError::ConstraintViolation { kind, .. } => Some(*kind),
            StoreError::Fault(_) => None,
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::ConstraintViolation { .. } => None,
            StoreError::Fault(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Fault(e)
    }
}

/// Error returned by the HTTP handlers. Always rendered as `{"error": message}`.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "{}", _0)]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ConstraintViolation { message, .. } => ApiError::BadRequest(message),
            StoreError::Fault(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
