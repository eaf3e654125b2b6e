//! Shared response envelope for API handlers.
//!
//! Every successful response carries `"success": true` alongside its
//! payload fields. Use [`Success`] instead of ad-hoc `json!` bodies.

use serde::Serialize;

/// `{ "success": true, ...T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(DrinkList { drinks })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}
