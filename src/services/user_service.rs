//! User service: field validation in front of the user repository.

use std::sync::Arc;

use log::{debug, info, warn};
use sqlx::PgPool;
use validator::Validate;

use crate::errors::UserError;
use crate::models::User;
use crate::repositories::{PgUserRepository, UserRepository};
use crate::utils::log_sanitizer::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(PgUserRepository::new(pool)),
        }
    }

    /// Create a UserService over any repository (for dependency injection).
    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, user: User) -> Result<User, UserError> {
        ensure_fields_present(&user)?;

        info!("Creating user with email: {}", mask_email(&user.email));
        self.repository.create(user).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, UserError> {
        debug!("Fetching user by ID: {}", id);
        self.repository.get(id).await
    }

    /// Replace name and email of user `id`.
    pub async fn update_user(&self, id: i64, user: User) -> Result<(), UserError> {
        ensure_fields_present(&user)?;

        info!("Updating user {} with email: {}", id, mask_email(&user.email));
        self.repository.update(id, user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        info!("Deleting user: {}", id);
        self.repository.delete(id).await
    }
}

fn ensure_fields_present(user: &User) -> Result<(), UserError> {
    user.validate().map_err(|e| {
        warn!("Validation failed for user payload: {}", e);
        UserError::EmptyFields
    })
}
