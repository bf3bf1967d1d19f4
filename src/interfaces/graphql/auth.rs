//! Bearer-token authentication for resolvers
//!
//! The HTTP layer lifts the `Authorization: Bearer` header into the request
//! context; resolvers other than `login` call [`require_login`] and fold a
//! failure into their `{code, message}` payload.

use async_graphql::Context;

use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::jwt::{verify_token, Claims, JwtConfig};

/// Raw bearer token from the Authorization header, when one was sent.
pub struct BearerToken(pub Option<String>);

/// Verify an optional bearer token against the signing config.
pub fn authenticate(token: Option<&str>, config: &JwtConfig) -> DomainResult<Claims> {
    let token =
        token.ok_or_else(|| DomainError::Unauthorized("Missing bearer token".to_string()))?;

    verify_token(token, config)
        .map_err(|_| DomainError::Unauthorized("Invalid or expired token".to_string()))
}

/// Resolver guard: every operation except `login` requires a valid token.
pub fn require_login(ctx: &Context<'_>) -> DomainResult<Claims> {
    let token = ctx
        .data_opt::<BearerToken>()
        .and_then(|bearer| bearer.0.as_deref());
    let config = ctx.data_unchecked::<JwtConfig>();
    authenticate(token, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;

    #[test]
    fn issued_token_authenticates() {
        let config = JwtConfig::default();
        let token = create_token(7, "alice", &config).unwrap();

        let claims = authenticate(Some(&token), &config).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn missing_token_is_unauthorized() {
        let err = authenticate(None, &JwtConfig::default()).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[test]
    fn tampered_token_is_unauthorized() {
        let config = JwtConfig::default();
        let token = create_token(7, "alice", &config).unwrap();
        let tampered = format!("{}x", token);

        let err = authenticate(Some(&tampered), &config).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
