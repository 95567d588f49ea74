use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User row stored in the `users` table.
///
/// The same type is used as the request body for create and update. `id` is
/// assigned by the database on insert and is never read from a request body.
/// Missing `name`/`email` fields deserialize as empty strings so they are
/// reported as validation failures rather than malformed payloads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, Validate, ToSchema)]
pub struct User {
    /// Identifier generated by the database
    #[serde(default, skip_deserializing)]
    #[schema(example = 1, read_only)]
    pub id: i64,
    /// Display name (stored as VARCHAR(100))
    #[serde(default)]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address, unique across users (stored as VARCHAR(100))
    #[serde(default)]
    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl User {
    /// Build a user that has not been persisted yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }
}
