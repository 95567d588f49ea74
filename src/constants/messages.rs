//! Success message constants used throughout the application.

pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETED: &str = "User deleted successfully";

pub const MSG_SERVER_RUNNING: &str = "Server is running";
