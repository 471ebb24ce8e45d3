//! Randomizer Library
//!
//! Fast, non-cryptographic random values for tests, simulations and
//! fixtures. Instead of a PRNG with shared running state, every draw keys
//! a hash with a fresh random seed and takes the digest. A small pool of
//! reusable hash states keeps that cheap under concurrent load.
//!
//! # Architecture
//!
//! ```text
//! entropy (fresh seed) → pool (acquire / digest / release) → scalar, network
//!                          ↓
//!                       metrics
//! ```
//!
//! # Design Principles
//!
//! - **No shared generator state**: only pool membership is shared
//! - **Never blocks**: an empty or contended pool allocates, a full one discards
//! - **Injectable**: every derivation takes an [`EntropySource`]
//! - **No cryptographic claims**: outputs are good enough for test data
//!
//! # Example
//!
//! ```
//! use randomizer::{
//!     network::{self, MulticastScope, UnicastType},
//!     pool::HashPool,
//!     scalar,
//! };
//!
//! // Use the process-wide default pool
//! let port: u16 = randomizer::uint_interval(1024, 65535).unwrap();
//! assert!(port >= 1024);
//!
//! // Or inject your own
//! let pool = HashPool::new(8);
//! let x = scalar::float64(&pool);
//! assert!((0.0..1.0).contains(&x));
//!
//! let addr = network::ipv6_unicast_addr(&pool, UnicastType::LinkLocal);
//! assert_eq!(addr.segments()[0], 0xfe80);
//!
//! let group = randomizer::Network.ipv6_multicast_addr(MulticastScope::SiteLocal);
//! assert!(group.is_multicast());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod entropy;
pub mod metrics;
pub mod network;
pub mod pool;
pub mod scalar;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root
pub use entropy::{EntropySource, PooledRng, Seed};
pub use network::{MacAddr, MulticastScope, UnicastType};
pub use pool::{HashPool, HashState, PoolConfig, PoolSnapshot, DEFAULT_CAPACITY};
pub use scalar::{RangeError, SignedInt, UnsignedInt};

use once_cell::sync::Lazy;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_POOL: Lazy<HashPool> = Lazy::new(|| HashPool::new(DEFAULT_CAPACITY));

/// Returns the process-wide pool, creating it on first use.
///
/// Holds [`DEFAULT_CAPACITY`] states and lives for the rest of the process.
pub fn default_pool() -> &'static HashPool {
    &DEFAULT_POOL
}

/// Draws an unbounded signed integer from the default pool.
pub fn int<T: SignedInt>() -> T {
    scalar::signed(default_pool())
}

/// Draws a signed integer in `[min, max)` from the default pool.
pub fn int_interval<T: SignedInt>(min: T, max: T) -> Result<T, RangeError> {
    scalar::bounded_signed(default_pool(), min, max)
}

/// Draws an unbounded unsigned integer from the default pool.
pub fn uint<T: UnsignedInt>() -> T {
    scalar::unsigned(default_pool())
}

/// Draws an unsigned integer in `[min, max)` from the default pool.
pub fn uint_interval<T: UnsignedInt>(min: T, max: T) -> Result<T, RangeError> {
    scalar::bounded_unsigned(default_pool(), min, max)
}

/// Draws an `f32` in `[0, 1)` from the default pool.
pub fn float32() -> f32 {
    scalar::float32(default_pool())
}

/// Draws an `f64` in `[0, 1)` from the default pool.
pub fn float64() -> f64 {
    scalar::float64(default_pool())
}

/// Network identifiers drawn from the default pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Network;

impl Network {
    /// See [`network::ipv4_addr`].
    pub fn ipv4_addr(self) -> Ipv4Addr {
        network::ipv4_addr(default_pool())
    }

    /// See [`network::ipv6_addr`].
    pub fn ipv6_addr(self) -> Ipv6Addr {
        network::ipv6_addr(default_pool())
    }

    /// See [`network::mac_addr`].
    pub fn mac_addr(self, local: bool, multicast: bool) -> MacAddr {
        network::mac_addr(default_pool(), local, multicast)
    }

    /// See [`network::ipv6_unicast_addr`].
    pub fn ipv6_unicast_addr(self, kind: UnicastType) -> Ipv6Addr {
        network::ipv6_unicast_addr(default_pool(), kind)
    }

    /// See [`network::ipv6_multicast_addr`].
    pub fn ipv6_multicast_addr(self, scope: MulticastScope) -> Ipv6Addr {
        network::ipv6_multicast_addr(default_pool(), scope)
    }
}
