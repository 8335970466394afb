//! JWT Token Service
//!
//! Mints bearer tokens from OAuth profiles and verifies presented tokens.
//! Expiry is reported separately from signature failure so the gate can tell
//! an expired credential apart from a forged one.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::auth::{AuthenticatedUser, OAuthProfile};

use super::config::JwtConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the provider-issued user id)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            google_id: claims.sub,
            name: claims.name,
            email: claims.email,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Verification failure, with expiry distinguished from everything else
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// Service for minting and verifying HS256 bearer tokens
pub struct JwtService {
    secret: String,
    expires_in_secs: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expires_in_secs: config.expires_in_secs,
        }
    }

    /// Mint a token carrying the profile's identity claims
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` when encoding fails.
    pub fn mint(&self, profile: &OAuthProfile) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: profile.google_id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expires_in_secs)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify a token's signature and expiry and decode its claims
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` when the exp claim has passed, and
    /// `TokenError::Invalid` for every other verification failure.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        // Pin the algorithm to prevent algorithm confusion attacks. Zero
        // leeway: a token one second past exp is already expired.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(&JwtConfig {
            secret: "test-jwt-secret-key-for-unit-tests-min-32".to_string(),
            expires_in_secs: 3600,
        })
    }

    fn profile() -> OAuthProfile {
        OAuthProfile {
            google_id: "108234567890123456789".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn mint_then_verify_round_trips_claims() {
        let service = service();
        let token = service.mint(&profile()).unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "108234567890123456789");
        assert_eq!(claims.name, "Test User");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_reports_expired_not_invalid() {
        let expired_service = JwtService::new(&JwtConfig {
            secret: "test-jwt-secret-key-for-unit-tests-min-32".to_string(),
            expires_in_secs: -3600,
        });
        let token = expired_service.mint(&profile()).unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let other = JwtService::new(&JwtConfig {
            secret: "a-completely-different-secret-altogether".to_string(),
            expires_in_secs: 3600,
        });
        let token = other.mint(&profile()).unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(
            service().verify("not-a-token-at-all"),
            Err(TokenError::Invalid)
        );
    }
}
