//! Float derivation.
//!
//! Keeps exactly as many draw bits as the target mantissa holds (24 for
//! `f32`, 53 for `f64`) and scales them into `[0, 1)`. Every result is an
//! exact multiple of `2^-24` or `2^-53`, and the largest is `1 - 2^-24` or
//! `1 - 2^-53`, so 1.0 is never produced.

use crate::entropy::EntropySource;

const F32_MANTISSA_BITS: u32 = 24;
const F64_MANTISSA_BITS: u32 = 53;

/// Draws an `f32` in `[0, 1)`.
pub fn float32(source: &(impl EntropySource + ?Sized)) -> f32 {
    let bits = source.next_u32() & ((1 << F32_MANTISSA_BITS) - 1);
    bits as f32 / (1u32 << F32_MANTISSA_BITS) as f32
}

/// Draws an `f64` in `[0, 1)`.
pub fn float64(source: &(impl EntropySource + ?Sized)) -> f64 {
    let bits = source.next_u64() & ((1 << F64_MANTISSA_BITS) - 1);
    bits as f64 / (1u64 << F64_MANTISSA_BITS) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::HashPool;
    use crate::testing::FixedSource;
    use std::collections::HashSet;

    #[test]
    fn test_all_ones_below_one() {
        let source = FixedSource::new([u64::MAX]);
        assert!(float32(&source) < 1.0);
        assert!(float64(&source) < 1.0);
        assert_eq!(float32(&source), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(float64(&source), 1.0 - f64::EPSILON / 2.0);
    }

    #[test]
    fn test_zero_draw() {
        let source = FixedSource::new([0]);
        assert_eq!(float32(&source), 0.0);
        assert_eq!(float64(&source), 0.0);
    }

    #[test]
    fn test_high_bits_ignored() {
        // Only bits above the mantissa are set
        let source = FixedSource::new([0xFF00_0000]);
        assert_eq!(float32(&source), 0.0);

        let source = FixedSource::new([0xFFE0_0000_0000_0000]);
        assert_eq!(float64(&source), 0.0);
    }

    #[test]
    fn test_half() {
        let source = FixedSource::new([0x0080_0000]);
        assert_eq!(float32(&source), 0.5);

        let source = FixedSource::new([0x0010_0000_0000_0000]);
        assert_eq!(float64(&source), 0.5);
    }

    #[test]
    fn test_pool_floats_in_unit_interval() {
        for capacity in [0, 1, 8] {
            let pool = HashPool::new(capacity);
            for _ in 0..1000 {
                let x = float32(&pool);
                let y = float64(&pool);
                assert!((0.0..1.0).contains(&x));
                assert!((0.0..1.0).contains(&y));
            }
        }
    }

    #[test]
    fn test_pool_floats_vary() {
        let pool = HashPool::new(4);
        let draws: HashSet<u64> = (0..1000).map(|_| float64(&pool).to_bits()).collect();
        assert!(draws.len() > 990);
    }
}
