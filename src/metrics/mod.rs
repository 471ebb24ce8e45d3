//! Prometheus metrics for hash-state pools.
//!
//! # Metrics Exposed
//!
//! - `randomizer_pool_capacity` - Fixed pool capacity
//! - `randomizer_pool_idle` - States currently idle in the pool
//! - `randomizer_pool_reused_total` - Acquisitions served from the pool
//! - `randomizer_pool_allocated_total` - Acquisitions that fell back to allocation
//! - `randomizer_pool_returned_total` - Releases returned to the pool
//! - `randomizer_pool_discarded_total` - Releases dropped
//!
//! # Example
//!
//! ```
//! use randomizer::metrics::MetricsRegistry;
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! registry.update(&randomizer::default_pool().stats());
//!
//! let text = registry.encode().expect("Failed to encode metrics");
//! assert!(text.contains("randomizer_pool_capacity 50"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
