use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // account / credential stuffs
    #[error("login already taken")]
    DuplicateLogin,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // resource outcomes. NotFound also covers rows that exist under another
    // restaurant, so cross-tenant probing looks identical to absence.
    #[error("not found")]
    NotFound,
    #[error("caller owns no restaurant")]
    NoRestaurant,
    #[error("caller already owns a restaurant")]
    AlreadyOwnsRestaurant,
    #[error("referenced record is not yours or does not exist")]
    InvalidReference,
    #[error("validation error: {0}")]
    Validation(String),

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
    fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateLogin => "DUPLICATE_LOGIN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::NoRestaurant => "NO_RESTAURANT",
            Self::AlreadyOwnsRestaurant => "ALREADY_OWNS_RESTAURANT",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateLogin => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NoRestaurant | Self::AlreadyOwnsRestaurant | Self::InvalidReference => {
                StatusCode::BAD_REQUEST
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // db/internal details stay in the logs, not in the response body
        let message = match self {
            Self::Db(e) => {
                log::error!("database error: {}", e);
                "internal error".to_string()
            }
            Self::Internal(e) => {
                log::error!("internal error: {}", e);
                "internal error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message,
        })
    }
}
