//! Permission-gated access for protected routes.
//!
//! Each protected handler names its required permission in its signature:
//!
//! ```ignore
//! async fn create_drink(_auth: Authorized<PostDrinks>, ...) -> AppResult<...>
//! ```

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use quizbar_core::permissions;

use super::auth::BearerToken;
use crate::auth::{AuthError, Claims};
use crate::error::AppError;
use crate::state::CoffeeState;

/// A permission string a route requires.
pub trait Permission {
    const NAME: &'static str;
}

/// `get:drinks-detail`
pub struct GetDrinksDetail;
/// `post:drinks`
pub struct PostDrinks;
/// `patch:drinks`
pub struct PatchDrinks;
/// `delete:drinks`
pub struct DeleteDrinks;

impl Permission for GetDrinksDetail {
    const NAME: &'static str = permissions::GET_DRINKS_DETAIL;
}

impl Permission for PostDrinks {
    const NAME: &'static str = permissions::POST_DRINKS;
}

impl Permission for PatchDrinks {
    const NAME: &'static str = permissions::PATCH_DRINKS;
}

impl Permission for DeleteDrinks {
    const NAME: &'static str = permissions::DELETE_DRINKS;
}

/// Require `permission` in the token's `permissions` claim.
pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsMissing)?;

    if granted.iter().any(|p| p == permission) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}

/// Proof that the request carried a valid token granting `P`.
///
/// Rejects with the matching [`AuthError`] otherwise. The token's claims are
/// not passed on to the handler.
pub struct Authorized<P: Permission>(PhantomData<P>);

impl<P> FromRequestParts<CoffeeState> for Authorized<P>
where
    P: Permission + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CoffeeState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let claims = state.verifier.verify(&token).await.inspect_err(|err| {
            tracing::warn!(code = err.code(), error = %err, "Token rejected");
        })?;

        check_permission(&claims, P::NAME).inspect_err(|_| {
            tracing::warn!(sub = %claims.sub, required = P::NAME, "Permission check failed");
        })?;

        Ok(Authorized(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn claims(permissions: Option<&[&str]>) -> Claims {
        Claims {
            sub: "auth0|manager".into(),
            exp: 0,
            permissions: permissions.map(|ps| ps.iter().map(|p| p.to_string()).collect()),
        }
    }

    #[test]
    fn granted_permission_passes() {
        let c = claims(Some(&["get:drinks-detail", "post:drinks"]));
        assert!(check_permission(&c, PostDrinks::NAME).is_ok());
    }

    #[test]
    fn absent_permission_is_denied() {
        let c = claims(Some(&["get:drinks-detail"]));
        assert_matches!(check_permission(&c, DeleteDrinks::NAME), Err(AuthError::PermissionDenied));
    }

    #[test]
    fn missing_claim_is_reported_separately() {
        assert_matches!(
            check_permission(&claims(None), GetDrinksDetail::NAME),
            Err(AuthError::PermissionsMissing)
        );
    }

    #[test]
    fn permission_names_match_provider_strings() {
        assert_eq!(GetDrinksDetail::NAME, "get:drinks-detail");
        assert_eq!(PatchDrinks::NAME, "patch:drinks");
    }
}
