//! HTTP layer for the trivia and coffee shop services.
//!
//! Exposes the building blocks (config, state, error handling, auth gate,
//! routes, router) so integration tests and both binaries share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
