//! Keyed Digest Primitive
//!
//! HMAC-SHA256 plus the hex helpers used to print and parse digests and keys.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Digest output type (256 bits / 32 bytes)
pub type Digest = [u8; 32];

/// Compute HMAC-SHA256 of `data` under `key`.
///
/// HMAC accepts keys of any length, so this never fails.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Digest {
    let mut mac = new_mac(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Check `expected` against HMAC-SHA256 of `data` in constant time.
pub fn hmac_sha256_matches(key: &[u8], data: &[u8], expected: &[u8]) -> bool {
    let mut mac = new_mac(key);
    mac.update(data);
    mac.verify_slice(expected).is_ok()
}

fn new_mac(key: &[u8]) -> HmacSha256 {
    match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    }
}

/// Encode bytes as uppercase hex.
pub fn to_upper_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode hex in either case.
pub fn from_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.trim())
}
