//! Entropy Source
//!
//! All randomness in a session comes from a single cryptographically secure
//! generator. Production uses [`rand::rngs::OsRng`]; tests inject a seeded
//! [`rand::rngs::StdRng`] for reproducible sessions.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use hmac_rps::core::rng::{fill_key, pick_index};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! assert!(pick_index(&mut rng, 5) < 5);
//! assert_eq!(fill_key(&mut rng, 32).len(), 32);
//! ```

use rand::{CryptoRng, Rng, RngCore};

/// Marker for generators a session may draw from.
pub trait SessionRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SessionRng for T {}

/// Pick a uniform index in `[0, n)`.
///
/// Each call is independent of every previous one.
#[inline]
pub fn pick_index<R: SessionRng>(rng: &mut R, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    rng.gen_range(0..n)
}

/// Fill `len` fresh random bytes.
pub fn fill_key<R: SessionRng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = StdRng::seed_from_u64(12345);
        for n in 1..20 {
            for _ in 0..100 {
                assert!(pick_index(&mut rng, n) < n);
            }
        }
        assert_eq!(pick_index(&mut rng, 0), 0);
    }

    #[test]
    fn test_pick_index_covers_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 5];
        for _ in 0..5000 {
            counts[pick_index(&mut rng, 5)] += 1;
        }
        // Roughly uniform: each bucket near 1000
        for count in counts {
            assert!(count > 800 && count < 1200, "skewed bucket: {}", count);
        }
    }

    #[test]
    fn test_fill_key_fresh() {
        let mut rng = StdRng::seed_from_u64(9999);
        let a = fill_key(&mut rng, 32);
        let b = fill_key(&mut rng, 32);
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = StdRng::seed_from_u64(777);
        let mut rng2 = StdRng::seed_from_u64(777);
        assert_eq!(fill_key(&mut rng1, 32), fill_key(&mut rng2, 32));
        assert_eq!(pick_index(&mut rng1, 7), pick_index(&mut rng2, 7));
    }
}
