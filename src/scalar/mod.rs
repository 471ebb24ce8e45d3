//! Scalar values derived from raw entropy draws.
//!
//! Bounded integers for every fixed width and unit-interval floats. All
//! functions take the [`EntropySource`](crate::entropy::EntropySource) to
//! draw from; the crate root offers the same operations on the default
//! pool.

mod float;
mod integer;

pub use float::{float32, float64};
pub use integer::{
    bounded_signed, bounded_unsigned, signed, unsigned, RangeError, SignedInt, UnsignedInt,
};
