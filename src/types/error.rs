use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("too many attempts, try again later")]
    TooManyRequests,

    // auth flows
    #[error("email address is already in use")]
    EmailAlreadyInUse,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    WeakPassword(usize),
    #[error("email or password is incorrect")]
    InvalidCredential,
    #[error("current password is incorrect")]
    WrongPassword,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = &err {
            return AppError::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::Db(err),
        }
    }

    fn public_message(&self) -> String {
        match self {
            // Never echo driver or internal details to clients.
            Self::Db(_) | Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::Conflict(_) | Self::EmailAlreadyInUse => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_)
            | Self::BadRequest(_)
            | Self::InvalidEmail
            | Self::WeakPassword(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredential | Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        }
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.public_message() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: AppError = DbErr::RecordNotFound("missing".into()).into();
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn auth_errors_have_provider_style_kinds() {
        assert_eq!(AppError::EmailAlreadyInUse.kind(), "EMAIL_ALREADY_IN_USE");
        assert_eq!(AppError::EmailAlreadyInUse.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::WeakPassword(6).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TooManyRequests.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn internal_details_are_hidden() {
        let err = AppError::Internal("argon2 blew up".into());
        assert_eq!(err.public_message(), "internal server error");
        assert_eq!(AppError::WeakPassword(6).public_message(), "password must be at least 6 characters");
    }
}
