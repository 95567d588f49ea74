//! User handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{
    CODE_INVALID_USER_ID, ERR_CREATE_USER_FAILED, ERR_DELETE_USER_FAILED, ERR_FETCH_USER_FAILED,
    ERR_INVALID_USER_ID, ERR_UPDATE_USER_FAILED, MSG_USER_DELETED, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{MessageResponse, User, UserEnvelope};
use crate::services::UserService;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Malformed JSON or empty name/email", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage error (e.g. duplicate email)", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service
        .create_user(body.into_inner())
        .await
        .map_err(|e| ApiError::from_user_error(e, ERR_CREATE_USER_FAILED))?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(UserEnvelope::from(user)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;
    debug!("Fetching user with id: {}", user_id);

    let user = user_service
        .get_user(user_id)
        .await
        .map_err(|e| ApiError::from_user_error(e, ERR_FETCH_USER_FAILED))?;

    Ok(HttpResponse::Ok().json(UserEnvelope::from(user)))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid ID, malformed JSON or empty name/email", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;

    user_service
        .update_user(user_id, body.into_inner())
        .await
        .map_err(|e| ApiError::from_user_error(e, ERR_UPDATE_USER_FAILED))?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_UPDATED)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage error", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;

    user_service
        .delete_user(user_id)
        .await
        .map_err(|e| ApiError::from_user_error(e, ERR_DELETE_USER_FAILED))?;

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_DELETED)))
}

fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!("Rejected malformed user id: {:?}", raw);
        ApiError::bad_request(CODE_INVALID_USER_ID, ERR_INVALID_USER_ID)
    })
}
