use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::validation::FieldError;

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("role not found")]
    RoleNotFound,
    #[error("contact not found")]
    ContactNotFound,
    #[error("blocking not found")]
    BlockingNotFound,
    #[error("activity log not found")]
    ActivityLogNotFound,
    #[error("login already registered")]
    LoginAlreadyExists,
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("role already exists")]
    RoleAlreadyExists,
    #[error("contact already exists")]
    ContactAlreadyExists,
    #[error("blocking already exists")]
    BlockingAlreadyExists,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    PasswordsNotMatch(&'static str),
    #[error("registration failed: {source}")]
    Registration {
        #[source]
        source: Box<AccountsServiceError>,
    },
    #[error("activity log is missing required data")]
    ActivityLogMissingData,
    #[error("authentication failed")]
    AuthFailed,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    /// Wrap a registration-phase failure, preserving the cause.
    pub fn registration(cause: AccountsServiceError) -> Self {
        Self::Registration {
            source: Box::new(cause),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RoleNotFound => "ROLE_NOT_FOUND",
            Self::ContactNotFound => "CONTACT_NOT_FOUND",
            Self::BlockingNotFound => "BLOCKING_NOT_FOUND",
            Self::ActivityLogNotFound => "ACTIVITY_LOG_NOT_FOUND",
            Self::LoginAlreadyExists => "LOGIN_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RoleAlreadyExists => "ROLE_ALREADY_EXISTS",
            Self::ContactAlreadyExists => "CONTACT_ALREADY_EXISTS",
            Self::BlockingAlreadyExists => "BLOCKING_ALREADY_EXISTS",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::PasswordsNotMatch(_) => "PASSWORDS_NOT_MATCH",
            Self::Registration { .. } => "REGISTRATION_FAILED",
            Self::ActivityLogMissingData => "ACTIVITY_LOG_MISSING_DATA",
            Self::AuthFailed => "AUTH_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Per-field messages for validation errors, the cause kind for
    /// registration failures, empty otherwise.
    fn details(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect(),
            Self::Registration { source } => match source.as_ref() {
                Self::Validation(errors) => errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect(),
                cause => vec![format!("{}: {}", cause.kind(), cause)],
            },
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::RoleNotFound
            | Self::ContactNotFound
            | Self::BlockingNotFound
            | Self::ActivityLogNotFound => StatusCode::NOT_FOUND,
            Self::LoginAlreadyExists
            | Self::EmailAlreadyExists
            | Self::RoleAlreadyExists
            | Self::ContactAlreadyExists
            | Self::BlockingAlreadyExists => StatusCode::CONFLICT,
            Self::Validation(_)
            | Self::PasswordsNotMatch(_)
            | Self::Registration { .. }
            | Self::ActivityLogMissingData => StatusCode::BAD_REQUEST,
            Self::AuthFailed => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
            "details": self.details(),
        });
        (status, axum::Json(body)).into_response()
    }
}
