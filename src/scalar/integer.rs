//! Integer derivation.
//!
//! Draws are truncated to the target width and reduced into a half-open
//! interval `[min, max)` by modulo. Reduction happens in the unsigned
//! domain, so every width and every interval that fits the type is
//! handled, including intervals wider than `T::MAX` and a draw of
//! `T::MIN`.

use crate::entropy::EntropySource;
use std::fmt::Debug;
use thiserror::Error;

/// Errors from bounded integer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("empty interval: max ({max}) must be greater than min ({min})")]
    EmptyInterval { min: i128, max: i128 },
}

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integers that can be drawn.
pub trait UnsignedInt: sealed::Sealed + Copy + Ord + Debug {
    /// Truncates a 64-bit draw to this width.
    fn from_draw(draw: u64) -> Self;

    /// Returns `min + self % (max - min)`. Requires `max > min`.
    fn reduce(self, min: Self, max: Self) -> Self;

    #[doc(hidden)]
    fn to_i128(self) -> i128;
}

/// Fixed-width signed integers that can be drawn.
pub trait SignedInt: sealed::Sealed + Copy + Ord + Debug {
    /// Truncates a 64-bit draw to this width.
    fn from_draw(draw: u64) -> Self;

    /// Returns `min + |self| % (max - min)`. Requires `max > min`.
    ///
    /// `|T::MIN|` is taken as its unsigned magnitude `2^(bits - 1)`, so the
    /// result stays in range for every draw.
    fn reduce(self, min: Self, max: Self) -> Self;

    #[doc(hidden)]
    fn to_i128(self) -> i128;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl UnsignedInt for $t {
            #[inline]
            fn from_draw(draw: u64) -> Self {
                draw as $t
            }

            #[inline]
            fn reduce(self, min: Self, max: Self) -> Self {
                min + self % (max - min)
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SignedInt for $t {
            #[inline]
            fn from_draw(draw: u64) -> Self {
                draw as $t
            }

            #[inline]
            fn reduce(self, min: Self, max: Self) -> Self {
                let span = max.wrapping_sub(min) as $u;
                let offset = self.unsigned_abs() % span;
                min.wrapping_add(offset as $t)
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Draws an unbounded signed integer.
pub fn signed<T: SignedInt>(source: &(impl EntropySource + ?Sized)) -> T {
    T::from_draw(source.next_u64())
}

/// Draws an unbounded unsigned integer.
pub fn unsigned<T: UnsignedInt>(source: &(impl EntropySource + ?Sized)) -> T {
    T::from_draw(source.next_u64())
}

/// Draws a signed integer in `[min, max)`.
pub fn bounded_signed<T: SignedInt>(
    source: &(impl EntropySource + ?Sized),
    min: T,
    max: T,
) -> Result<T, RangeError> {
    if max <= min {
        return Err(RangeError::EmptyInterval {
            min: min.to_i128(),
            max: max.to_i128(),
        });
    }
    Ok(T::from_draw(source.next_u64()).reduce(min, max))
}

/// Draws an unsigned integer in `[min, max)`.
pub fn bounded_unsigned<T: UnsignedInt>(
    source: &(impl EntropySource + ?Sized),
    min: T,
    max: T,
) -> Result<T, RangeError> {
    if max <= min {
        return Err(RangeError::EmptyInterval {
            min: min.to_i128(),
            max: max.to_i128(),
        });
    }
    Ok(T::from_draw(source.next_u64()).reduce(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::HashPool;
    use crate::testing::FixedSource;
    use proptest::prelude::*;

    #[test]
    fn test_empty_interval_rejected() {
        let pool = HashPool::new(1);
        assert_eq!(
            bounded_unsigned(&pool, 5u32, 5),
            Err(RangeError::EmptyInterval { min: 5, max: 5 })
        );
        assert_eq!(
            bounded_signed(&pool, 3i8, -3),
            Err(RangeError::EmptyInterval { min: 3, max: -3 })
        );
    }

    #[test]
    fn test_empty_interval_consumes_no_entropy() {
        let pool = HashPool::new(1);
        let _ = bounded_unsigned(&pool, 1u8, 0);
        assert_eq!(pool.stats().acquisitions(), 0);
    }

    #[test]
    fn test_signed_min_draw_stays_in_range() {
        // 0x80 truncates to i8::MIN
        let source = FixedSource::new([0x80]);
        let value = bounded_signed(&source, -10i8, 10).unwrap();
        // |i8::MIN| = 128, 128 % 20 = 8
        assert_eq!(value, -2);

        for (min, max) in [(i8::MIN, i8::MAX), (0, 1), (-1, 0), (100, 127)] {
            let v = i8::MIN.reduce(min, max);
            assert!(v >= min && v < max, "{v} not in [{min}, {max})");
        }
    }

    #[test]
    fn test_signed_min_draw_i64() {
        let source = FixedSource::new([i64::MIN as u64]);
        let value = bounded_signed(&source, i64::MIN, i64::MAX).unwrap();
        assert!(value < i64::MAX);
    }

    #[test]
    fn test_wide_signed_interval() {
        // max - min overflows i8 but not u8
        let source = FixedSource::new([0x7F]);
        let value = bounded_signed(&source, -100i8, 100).unwrap();
        assert_eq!(value, -100 + 127);
    }

    #[test]
    fn test_negative_draw_uses_magnitude() {
        // -3 as i16
        let source = FixedSource::new([0xFFFD]);
        assert_eq!(bounded_signed(&source, 10i16, 20).unwrap(), 13);
    }

    #[test]
    fn test_unsigned_truncates_then_reduces() {
        let source = FixedSource::new([0x1_0000_0107]);
        assert_eq!(bounded_unsigned(&source, 0u8, 10).unwrap(), 7);
    }

    #[test]
    fn test_unbounded_truncation() {
        let source = FixedSource::new([0xFFFF_FFFF_FFFF_FF85]);
        assert_eq!(unsigned::<u8>(&source), 0x85);
        assert_eq!(signed::<i8>(&source), -123);
        assert_eq!(signed::<i64>(&source), -123);
    }

    #[test]
    fn test_single_value_interval() {
        let pool = HashPool::new(1);
        for _ in 0..100 {
            assert_eq!(bounded_signed(&pool, -7isize, -6).unwrap(), -7);
            assert_eq!(bounded_unsigned(&pool, 41usize, 42).unwrap(), 41);
        }
    }

    #[test]
    fn test_zero_capacity_pool_in_range() {
        let pool = HashPool::new(0);
        for _ in 0..1000 {
            let v = bounded_signed(&pool, -50i32, 50).unwrap();
            assert!((-50..50).contains(&v));
        }
    }

    proptest! {
        #[test]
        fn prop_unsigned_in_range(draw: u64, min: u64, max: u64) {
            prop_assume!(max > min);
            let source = FixedSource::new([draw]);
            let v = bounded_unsigned(&source, min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }

        #[test]
        fn prop_u16_in_range(draw: u64, min: u16, max: u16) {
            prop_assume!(max > min);
            let source = FixedSource::new([draw]);
            let v = bounded_unsigned(&source, min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }

        #[test]
        fn prop_signed_in_range(draw: u64, min: i64, max: i64) {
            prop_assume!(max > min);
            let source = FixedSource::new([draw]);
            let v = bounded_signed(&source, min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }

        #[test]
        fn prop_i8_in_range(draw: u64, min: i8, max: i8) {
            prop_assume!(max > min);
            let source = FixedSource::new([draw]);
            let v = bounded_signed(&source, min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }

        #[test]
        fn prop_pool_i32_in_range(min in -1000i32..1000, width in 1i32..1000) {
            let pool = HashPool::new(2);
            let v = bounded_signed(&pool, min, min + width).unwrap();
            prop_assert!(v >= min && v < min + width);
        }
    }
}
