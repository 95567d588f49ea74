//! Error message constants used throughout the application.

// Request errors
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_INVALID_PAYLOAD: &str = "Invalid request payload";

// Validation errors
pub const ERR_EMPTY_FIELDS: &str = "Name and email must not be empty";

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_CREATE_USER_FAILED: &str = "Failed to create user";
pub const ERR_FETCH_USER_FAILED: &str = "Failed to fetch user";
pub const ERR_UPDATE_USER_FAILED: &str = "Failed to update user";
pub const ERR_DELETE_USER_FAILED: &str = "Failed to delete user";
