//! JWT bearer authentication.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Claims carried by a clipdock access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration
    pub exp: i64,
}

/// Signs and verifies HS256 access tokens with a shared secret.
pub struct Authenticator {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Authenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for `user_id`, valid for `ttl`.
    pub fn issue_token(&self, user_id: &str, ttl: Duration) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::default();
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| ApiError::unauthorized(format!("Token validation failed: {e}")))?;
        Ok(data.claims)
    }
}

/// Authenticated user extracted from request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Axum extractor for authenticated user.
#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.auth.verify_token(token)?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let auth = Authenticator::new("test-secret");
        let token = auth.issue_token("user-1", Duration::minutes(5)).unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = Authenticator::new("test-secret");
        let token = auth.issue_token("user-1", Duration::minutes(-5)).unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let auth = Authenticator::new("test-secret");
        let token = auth.issue_token("user-1", Duration::minutes(5)).unwrap();
        let other = Authenticator::new("other-secret");
        assert!(other.verify_token(&token).is_err());
    }
}
