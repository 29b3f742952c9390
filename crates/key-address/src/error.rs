//! Error types for key addressing.
//!
//! All errors are strongly typed, deterministic for a given input, and
//! propagated without panicking.

/// Address error types covering build, parse, and match operations.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("type mark must be in [0..15] range, got {0}")]
    InvalidTypeMark(u8),

    #[error("key can't be masked for address: {0}")]
    UnsupportedKey(String),

    #[error("malformed address: {0}")]
    MalformedAddress(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, AddressError>;
