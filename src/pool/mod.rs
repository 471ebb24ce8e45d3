//! Hash-state pooling.
//!
//! Keeps a bounded set of reusable [`HashState`] objects so that entropy
//! draws do not allocate a fresh state on every call. The pool is purely a
//! throughput optimization: exhaustion and contention fall back to
//! transient states, never to waiting.

mod config;
mod hash_pool;
mod state;

pub use config::{ConfigError, PoolConfig, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use hash_pool::{HashPool, PoolSnapshot, PooledHashState};
pub use state::HashState;
