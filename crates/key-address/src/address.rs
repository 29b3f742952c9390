//! The address value type — build, parse, and match.
//!
//! Wire format: one header byte (high nibble key mask, low nibble type
//! mark), then the SHA3-256 or SHA3-384 digest of the key's identity
//! components, then a big-endian CRC32 control code over all preceding
//! bytes. Packed totals are 37 bytes (short) or 53 bytes (long).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Sha3_256, Sha3_384};

use crate::error::{AddressError, Result};
use crate::key::{AddressableKey, DynDigest};
use crate::mask::mask_for;

const CHECKSUM_LEN: usize = 4;

/// Packed length of the short (SHA3-256) form.
pub const SHORT_PACKED_LEN: usize = 1 + 32 + CHECKSUM_LEN;
/// Packed length of the long (SHA3-384) form.
pub const LONG_PACKED_LEN: usize = 1 + 48 + CHECKSUM_LEN;

/// A short, self-verifying fingerprint of a key.
///
/// Build one from a live key with [`KeyAddress::new`], or reconstruct one
/// from transported bytes or text with [`KeyAddress::from_packed`] /
/// [`str::parse`]. Parsing re-verifies the control code, so an instance in
/// hand is always internally consistent. Use
/// [`KeyAddress::is_matching_key`] to check a key against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyAddress {
    key_mask: u8,
    type_mark: u8,
    is_long: bool,
    key_digest: Vec<u8>,
    packed: Vec<u8>,
}

impl KeyAddress {
    /// Build a new address for `key`.
    ///
    /// `type_mark` is any value in `[0..15]` to be carried with the address
    /// (protected by the control code but otherwise uninterpreted).
    /// `use_long` selects the SHA3-384 variant over SHA3-256.
    pub fn new(key: &dyn AddressableKey, type_mark: u8, use_long: bool) -> Result<Self> {
        if type_mark & 0xF0 != 0 {
            return Err(AddressError::InvalidTypeMark(type_mark));
        }
        let key_mask = mask_for(&key.key_info())?;

        let mut digest: Box<dyn DynDigest> = if use_long {
            Box::new(Sha3_384::new())
        } else {
            Box::new(Sha3_256::new())
        };
        key.update_digest_with_key_components(digest.as_mut());
        let key_digest = digest.finalize().to_vec();

        let mut packed = Vec::with_capacity(1 + key_digest.len() + CHECKSUM_LEN);
        packed.push((key_mask << 4) | type_mark);
        packed.extend_from_slice(&key_digest);
        let crc = checksum(&packed);
        packed.extend_from_slice(&crc);

        Ok(Self {
            key_mask,
            type_mark,
            is_long: use_long,
            key_digest,
            packed,
        })
    }

    /// Parse a packed binary address, re-verifying its control code.
    pub fn from_packed(packed: &[u8]) -> Result<Self> {
        let is_long = match packed.len() {
            SHORT_PACKED_LEN => false,
            LONG_PACKED_LEN => true,
            n => {
                return Err(AddressError::MalformedAddress(format!(
                    "unexpected length {n}"
                )))
            }
        };

        let type_mark = packed[0] & 0x0F;
        let key_mask = packed[0] >> 4;
        if key_mask == 0 {
            return Err(AddressError::MalformedAddress("key mask is 0".into()));
        }

        let digest_end = packed.len() - CHECKSUM_LEN;
        if packed[digest_end..] != checksum(&packed[..digest_end]) {
            return Err(AddressError::MalformedAddress(
                "control code failed, address is broken".into(),
            ));
        }

        Ok(Self {
            key_mask,
            type_mark,
            is_long,
            key_digest: packed[1..digest_end].to_vec(),
            packed: packed.to_vec(),
        })
    }

    /// Parse the Base58 string form, as produced by `to_string`.
    pub fn from_string(s: &str) -> Result<Self> {
        let packed = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::MalformedAddress(format!("invalid base58: {e}")))?;
        Self::from_packed(&packed)
    }

    /// Check whether `key` is the key this address was built from.
    ///
    /// Rebuilds a throwaway address from `key` with the same digest variant
    /// and compares mask and digest; the type mark is deliberately ignored.
    /// An unsupported key propagates as an error rather than reading as
    /// "no match".
    pub fn is_matching_key(&self, key: &dyn AddressableKey) -> Result<bool> {
        let other = KeyAddress::new(key, 0, self.is_long)?;
        Ok(other.key_mask == self.key_mask && other.key_digest == self.key_digest)
    }

    /// The packed binary form.
    pub fn packed(&self) -> &[u8] {
        &self.packed
    }

    /// The 4-bit key family/size mask (1..=15).
    pub fn key_mask(&self) -> u8 {
        self.key_mask
    }

    /// The caller-supplied 4-bit tag (0..=15).
    pub fn type_mark(&self) -> u8 {
        self.type_mark
    }

    /// Whether this is the long (SHA3-384) variant.
    pub fn is_long(&self) -> bool {
        self.is_long
    }

    /// The digest of the key's identity components (32 or 48 bytes).
    pub fn key_digest(&self) -> &[u8] {
        &self.key_digest
    }
}

/// Big-endian CRC32 control code.
fn checksum(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut crc = crc32fast::Hasher::new();
    crc.update(bytes);
    crc.finalize().to_be_bytes()
}

impl fmt::Display for KeyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.packed).into_string())
    }
}

impl FromStr for KeyAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl Serialize for KeyAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
