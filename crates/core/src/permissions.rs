//! Permission strings carried in the `permissions` claim of access tokens.
//!
//! These must match the permissions configured on the identity provider's API.

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";
