use thiserror::Error;

/// The only failure a user can observe.
///
/// Unknown user, disabled account and wrong secret all map to the same
/// variant so the message does not reveal which one it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crypto error: {0}")]
    Crypto(#[from] bcrypt::BcryptError),

    #[error("Preferences decode error: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Preferences encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}
