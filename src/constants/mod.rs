//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the application:
//! error messages, success messages and machine-readable error codes.

pub mod error_codes;
pub mod errors;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
