//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Envelope wrapping a single user, as returned by create and get
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self { user }
    }
}
