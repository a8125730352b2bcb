//! JWT service for token generation and validation
//!
//! Tokens are stateless HS256 JWTs binding one user id to an absolute expiry.
//! Nothing is stored server-side, so there is no revocation: a token stays
//! valid until it expires.

use anyhow::{Context, Result};
use common::config::AuthConfig;
use common::{StoreError, StoreResult};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error message for any rejected token
pub const INVALID_TOKEN: &str = "Invalid token";

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Token expiration time in seconds (default: 7 days)
    pub token_expiry: u64,
}

impl From<&AuthConfig> for JwtConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            token_expiry: config.token_ttl_secs,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Issue a token for a user, expiring `token_expiry` seconds from now
    pub fn issue_token(&self, user_id: &str) -> Result<String> {
        self.issue_token_at(user_id, get_current_timestamp())
    }

    fn issue_token_at(&self, user_id: &str, issued_at: u64) -> Result<String> {
        let exp = issued_at
            .checked_add(self.config.token_expiry)
            .context("token expiry overflows the timestamp range")?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Resolve a token back to the user id it was issued for
    pub fn resolve_token(&self, token: &str) -> StoreResult<String> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                StoreError::unauthorized(INVALID_TOKEN)
            })?;

        // The library accepts exp == now; a token is only valid while now < exp.
        if token_data.claims.exp <= get_current_timestamp() {
            return Err(StoreError::unauthorized(INVALID_TOKEN));
        }

        Ok(token_data.claims.sub)
    }

    /// Get the token expiry time in seconds
    pub fn token_expiry(&self) -> u64 {
        self.config.token_expiry
    }
}
