//! Repository layer for database operations.
//!
//! This module separates business logic (services) from database access
//! (repositories), so services can be tested against a mocked repository.

pub mod user_repository;

pub use user_repository::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
