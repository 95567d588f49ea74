//! CRUD REST API for a single `users` table.
//!
//! Layers, outermost first: [`routes`] binds URLs to [`handlers`], handlers
//! call the [`services::UserService`], and the service delegates to a
//! [`repositories::UserRepository`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
