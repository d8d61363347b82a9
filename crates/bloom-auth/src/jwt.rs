use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use bloom_core::models::user::{Role, User};

use crate::error::AuthError;

/// Claims carried in a Bloom session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The user's id, stringified.
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: u64,
    pub exp: u64,
}

/// Issue an HS256 session token for an authenticated user.
pub fn issue_token(user: &User, secret: &[u8], ttl_seconds: u64) -> Result<String, AuthError> {
    let now = get_current_timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        iat: now,
        exp: now + ttl_seconds,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?)
}

/// Validate a session token's signature and expiry.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}
