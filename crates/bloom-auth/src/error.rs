use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately carries no detail about which part of the credential
    /// check failed.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
