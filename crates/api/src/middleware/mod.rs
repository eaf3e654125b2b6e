//! Authorization extractors for the coffee shop routes.
//!
//! Extractors run in declaration order before the handler body is parsed,
//! so each protected handler forms a chain of checks:
//!
//! 1. [`auth::BearerToken`] -- the `Authorization` header is well formed.
//! 2. [`crate::auth::TokenVerifier`] -- the token is genuine and current.
//! 3. [`permission::check_permission`] -- the required permission is granted.
//!
//! [`permission::Authorized`] runs the whole chain for one permission.

pub mod auth;
pub mod permission;
