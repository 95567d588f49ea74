use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use std::fmt;

pub mod user_error;

pub use user_error::UserError;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_USER_NOT_FOUND, CODE_VALIDATION_FAILED, ERR_EMPTY_FIELDS,
    ERR_USER_NOT_FOUND,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
}

impl ApiError {
    pub fn bad_request(code: &str, message: &str) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Map a domain error to its HTTP counterpart.
    ///
    /// Storage failures are logged here and replaced by `storage_message`; the
    /// underlying database error never reaches the client.
    pub fn from_user_error(err: UserError, storage_message: &str) -> Self {
        match err {
            UserError::EmptyFields => ApiError::BadRequest {
                code: CODE_VALIDATION_FAILED.to_string(),
                message: ERR_EMPTY_FIELDS.to_string(),
            },
            UserError::NotFound => ApiError::NotFound {
                code: CODE_USER_NOT_FOUND.to_string(),
                message: ERR_USER_NOT_FOUND.to_string(),
            },
            UserError::Storage(ref source) => {
                if err.is_unique_violation() {
                    warn!("{}: duplicate email: {}", storage_message, source);
                } else {
                    error!("{}: {}", storage_message, source);
                }
                ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: storage_message.to_string(),
                }
            }
        }
    }

    fn parts(&self) -> (&str, &str) {
        match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::InternalServerError { code, message } => (code.as_str(), message.as_str()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message) = self.parts();
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
        })
    }
}
