//! Bearer token issuing and verification for Mentora.
//!
//! Tokens are stateless signed JWTs: validity is proven purely by
//! signature and expiry, with no server-side session table and no
//! revocation list.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// User role as a lowercase string.
    pub role: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// Token-related errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token is past its expiry.
    #[error("token has expired")]
    Expired,

    /// The token failed signature or structural validation.
    #[error("invalid token")]
    Malformed,

    /// Signing a new token failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies signed bearer tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: u64,
}

impl TokenIssuer {
    /// Create a new issuer from a secret key and an expiry window in days.
    pub fn new(secret: &str, expiry_days: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_secs: expiry_days * 24 * 60 * 60,
        }
    }

    /// Issue a token binding a user id and role.
    ///
    /// Pure function of the inputs, the server secret, and the clock.
    pub fn issue(&self, user_id: i64, role: &crate::db::Role) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = TokenClaims {
            sub: user_id,
            role: role.as_str().to_string(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token, returning its claims.
    ///
    /// Distinguishes expiry from every other failure so callers can
    /// word the 401 message accordingly.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}
