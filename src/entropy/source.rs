//! Raw entropy draws.

use super::Seed;
use crate::pool::HashPool;

/// A source of raw 64-bit entropy draws.
///
/// Everything in [`scalar`](crate::scalar) and [`network`](crate::network)
/// is derived from this trait, so any implementation (the pool, a shared
/// reference to it, or a fixed sequence in tests) can be injected.
pub trait EntropySource {
    /// Returns one 64-bit draw.
    fn next_u64(&self) -> u64;

    /// Returns the low 32 bits of one draw.
    #[inline]
    fn next_u32(&self) -> u32 {
        (self.next_u64() & 0xFFFF_FFFF) as u32
    }

    /// Appends the 8 bytes of one draw to `buf`, little-endian.
    fn append_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.next_u64().to_le_bytes());
    }

    /// Fills `dest` with successive little-endian draws.
    fn fill_bytes(&self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    #[inline]
    fn next_u64(&self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

impl EntropySource for HashPool {
    /// Mixes a fresh seed through a leased hash state.
    ///
    /// The lease is released (and reset) before returning. The digest
    /// depends only on the seed, so reuse affects throughput, not output.
    fn next_u64(&self) -> u64 {
        let mut state = self.lease();
        state.digest(Seed::fresh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_draws_distinct() {
        let pool = HashPool::new(4);
        let draws: HashSet<u64> = (0..1000).map(|_| pool.next_u64()).collect();

        // 1000 64-bit draws colliding would be astronomically unlikely
        assert_eq!(draws.len(), 1000);
    }

    #[test]
    fn test_zero_capacity_draws_distinct() {
        let pool = HashPool::new(0);
        let draws: HashSet<u64> = (0..1000).map(|_| pool.next_u64()).collect();
        assert_eq!(draws.len(), 1000);
    }

    #[test]
    fn test_draw_returns_state_to_pool() {
        let pool = HashPool::new(3);
        for _ in 0..10 {
            pool.next_u32();
        }

        let stats = pool.stats();
        assert_eq!(stats.idle, 3);
        assert_eq!(stats.acquisitions(), 10);
        assert_eq!(stats.releases(), 10);
    }

    #[test]
    fn test_append_bytes_extends_buffer() {
        let pool = HashPool::new(1);
        let mut buf = vec![0xAA];

        pool.append_bytes(&mut buf);
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[0], 0xAA);

        pool.append_bytes(&mut buf);
        assert_eq!(buf.len(), 17);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let pool = HashPool::new(1);
        let mut buf = [0u8; 13];
        pool.fill_bytes(&mut buf);

        assert_eq!(pool.stats().acquisitions(), 2);
    }

    #[test]
    fn test_reference_is_a_source() {
        fn draw(source: impl EntropySource) -> u64 {
            source.next_u64()
        }

        let pool = HashPool::new(1);
        draw(&pool);
        assert_eq!(pool.stats().acquisitions(), 1);
    }
}
