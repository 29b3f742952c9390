//! End-to-end workflow: build an address for a key, transport it as text,
//! and verify the key against it on the other side.

use key_address::{AddressableKey, DynDigest, KeyAddress, KeyAlgorithm, KeyInfo};

/// Deterministic stand-in for an RSA key pair's public half.
struct FixtureKey {
    bits: u32,
    material: Vec<u8>,
}

impl FixtureKey {
    fn new(bits: u32, fill: u8) -> Self {
        Self {
            bits,
            material: vec![fill; (bits / 8) as usize],
        }
    }
}

impl AddressableKey for FixtureKey {
    fn key_info(&self) -> KeyInfo {
        KeyInfo {
            algorithm: KeyAlgorithm::RsaPublic,
            key_length_bits: self.bits,
            public_exponent: Some(0x10001),
        }
    }

    fn update_digest_with_key_components(&self, digest: &mut dyn DynDigest) {
        digest.update(&self.material);
        digest.update(&0x10001u64.to_be_bytes());
    }
}

#[test]
fn publish_and_verify_short_address() {
    let key = FixtureKey::new(2048, 0x11);

    // Publisher side: build and render to text.
    let addr = KeyAddress::new(&key, 4, false).unwrap();
    let published = addr.to_string();

    // Consumer side: parse the string and check the key against it.
    let received: KeyAddress = published.parse().unwrap();
    assert_eq!(received, addr);
    assert_eq!(received.type_mark(), 4);
    assert!(received.is_matching_key(&key).unwrap());

    // A different key of the same class does not match.
    let other = FixtureKey::new(2048, 0x22);
    assert!(!received.is_matching_key(&other).unwrap());
}

#[test]
fn publish_and_verify_long_address() {
    let key = FixtureKey::new(4096, 0x33);

    let addr = KeyAddress::new(&key, 0, true).unwrap();
    let received: KeyAddress = addr.to_string().parse().unwrap();
    assert!(received.is_long());
    assert!(received.is_matching_key(&key).unwrap());
}

#[test]
fn short_and_long_addresses_both_identify_one_key() {
    let key = FixtureKey::new(2048, 0x44);

    let short = KeyAddress::new(&key, 1, false).unwrap();
    let long = KeyAddress::new(&key, 1, true).unwrap();
    assert_ne!(short, long);
    assert!(short.is_matching_key(&key).unwrap());
    assert!(long.is_matching_key(&key).unwrap());
}

#[test]
fn corrupted_transport_is_rejected() {
    let key = FixtureKey::new(4096, 0x55);
    let addr = KeyAddress::new(&key, 2, false).unwrap();

    let mut bytes = addr.packed().to_vec();
    bytes[10] ^= 0x01;
    assert!(KeyAddress::from_packed(&bytes).is_err());
}

#[test]
fn addresses_survive_json_embedding() {
    let key = FixtureKey::new(2048, 0x66);
    let addr = KeyAddress::new(&key, 7, true).unwrap();

    let json = serde_json::to_string(&addr).unwrap();
    let back: KeyAddress = serde_json::from_str(&json).unwrap();
    assert_eq!(back, addr);
    assert!(back.is_matching_key(&key).unwrap());
}
