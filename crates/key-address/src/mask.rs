//! Mask classification — which 4-bit family/size code a key gets.
//!
//! Mask 0 is reserved and never produced; a key with no known mask cannot
//! be addressed at all.

use crate::error::{AddressError, Result};
use crate::key::{KeyAlgorithm, KeyInfo};

/// Mask for 2048-bit RSA keys with public exponent 65537.
pub const RSA_2048: u8 = 0x01;
/// Mask for 4096-bit RSA keys with public exponent 65537.
pub const RSA_4096: u8 = 0x02;

const F4_EXPONENT: u64 = 0x10001;

/// Classify a key into its address mask.
///
/// This match is the single extension point for new key families.
pub(crate) fn mask_for(info: &KeyInfo) -> Result<u8> {
    match info.algorithm {
        KeyAlgorithm::RsaPublic | KeyAlgorithm::RsaPrivate
            if info.public_exponent == Some(F4_EXPONENT) =>
        {
            match info.key_length_bits {
                2048 => Ok(RSA_2048),
                4096 => Ok(RSA_4096),
                _ => Err(AddressError::UnsupportedKey(info.to_string())),
            }
        }
        _ => Err(AddressError::UnsupportedKey(info.to_string())),
    }
}
