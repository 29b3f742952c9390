//! key-address — self-verifying fingerprints for cryptographic keys.
//!
//! An address packs a key's family/size mask, a caller-supplied 4-bit tag,
//! and a SHA3 digest of the key's identity components, sealed with a CRC32
//! control code. Distribute the short Base58 string; anyone holding the key
//! can verify it matches with [`KeyAddress::is_matching_key`] without ever
//! exchanging the full key.

pub mod address;
pub mod error;
pub mod key;
pub mod mask;

// Re-export primary types
pub use address::{KeyAddress, LONG_PACKED_LEN, SHORT_PACKED_LEN};
pub use error::{AddressError, Result};
pub use key::{AddressableKey, DynDigest, KeyAlgorithm, KeyInfo};
pub use mask::{RSA_2048, RSA_4096};
