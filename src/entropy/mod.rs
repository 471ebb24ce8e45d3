//! Hash-based entropy.
//!
//! Each draw generates a fresh [`Seed`], keys a pooled hash state with it
//! and returns the resulting digest. No generator state is shared between
//! draws, only pool membership, so concurrent callers never contend on
//! random-number state.

mod rng;
mod seed;
mod source;

pub use rng::PooledRng;
pub use seed::Seed;
pub use source::EntropySource;
