//! `rand_core` adapter.
//!
//! Lets any [`EntropySource`] drive code written against
//! [`rand_core::RngCore`]. The adapter carries no generator state of its
//! own; it only counts the bytes it has produced.
//!
//! This is not a `CryptoRng`. Outputs are good enough for test data and
//! nothing more.

use super::EntropySource;
use crate::pool::HashPool;
use rand_core::RngCore;

/// An [`RngCore`] backed by an [`EntropySource`].
pub struct PooledRng<S = &'static HashPool> {
    source: S,
    /// Bytes produced so far.
    bytes_generated: u64,
}

impl PooledRng {
    /// Creates an adapter over the process-wide default pool.
    pub fn from_default_pool() -> Self {
        Self::new(crate::default_pool())
    }
}

impl<S: EntropySource> PooledRng<S> {
    /// Wraps an entropy source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            bytes_generated: 0,
        }
    }

    /// Returns the number of bytes produced so far.
    pub fn bytes_generated(&self) -> u64 {
        self.bytes_generated
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: EntropySource> RngCore for PooledRng<S> {
    fn next_u32(&mut self) -> u32 {
        self.bytes_generated += 4;
        self.source.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.bytes_generated += 8;
        self.source.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes_generated += dest.len() as u64;
        self.source.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<S> std::fmt::Debug for PooledRng<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledRng")
            .field("bytes_generated", &self.bytes_generated)
            .finish_non_exhaustive()
    }
}
