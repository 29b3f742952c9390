//! Key introspection and digest-feed capabilities.
//!
//! The address codec never inspects key internals. A key describes itself
//! through [`KeyInfo`] and contributes its identity-defining bytes to an
//! opaque digest accumulator; what bytes constitute "the key" is entirely
//! the key's decision.

use std::fmt;

/// Dynamic digest accumulator fed by [`AddressableKey`] implementations.
///
/// Re-exported so downstream key types can implement the trait without
/// depending on the hash crates directly.
pub use sha3::digest::DynDigest;

/// Algorithm families a key can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    RsaPublic,
    RsaPrivate,
    Aes256,
}

/// Introspection result describing a key's family and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub algorithm: KeyAlgorithm,
    /// Key length in bits (e.g. 2048 or 4096 for RSA).
    pub key_length_bits: u32,
    /// Public exponent for RSA keys; `None` for symmetric keys.
    pub public_exponent: Option<u64>,
}

impl fmt::Display for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}", self.algorithm, self.key_length_bits)?;
        if let Some(e) = self.public_exponent {
            write!(f, "/e={e:#x}")?;
        }
        Ok(())
    }
}

/// A key that can be turned into, and checked against, a [`crate::KeyAddress`].
pub trait AddressableKey {
    /// Report the key's algorithm, length, and numeric parameters.
    fn key_info(&self) -> KeyInfo;

    /// Push the key's identity-defining bytes into `digest`.
    fn update_digest_with_key_components(&self, digest: &mut dyn DynDigest);
}
