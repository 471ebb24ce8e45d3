//! Metrics collection and registry.

use crate::pool::PoolSnapshot;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for hash-state pool monitoring.
pub struct MetricsRegistry {
    registry: Registry,

    capacity: IntGauge,
    idle: IntGauge,
    reused_total: IntCounter,
    allocated_total: IntCounter,
    returned_total: IntCounter,
    discarded_total: IntCounter,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all pool metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let capacity = IntGauge::new("randomizer_pool_capacity", "Fixed hash-state pool capacity")?;
        let idle = IntGauge::new("randomizer_pool_idle", "Hash states currently idle in the pool")?;
        let reused_total = IntCounter::new(
            "randomizer_pool_reused_total",
            "Acquisitions served from the pool",
        )?;
        let allocated_total = IntCounter::new(
            "randomizer_pool_allocated_total",
            "Acquisitions served by a transient allocation",
        )?;
        let returned_total = IntCounter::new(
            "randomizer_pool_returned_total",
            "Releases returned to the pool",
        )?;
        let discarded_total = IntCounter::new(
            "randomizer_pool_discarded_total",
            "Releases dropped because the pool was full or contended",
        )?;

        registry.register(Box::new(capacity.clone()))?;
        registry.register(Box::new(idle.clone()))?;
        registry.register(Box::new(reused_total.clone()))?;
        registry.register(Box::new(allocated_total.clone()))?;
        registry.register(Box::new(returned_total.clone()))?;
        registry.register(Box::new(discarded_total.clone()))?;

        Ok(Self {
            registry,
            capacity,
            idle,
            reused_total,
            allocated_total,
            returned_total,
            discarded_total,
        })
    }

    /// Updates all metrics from a pool snapshot.
    ///
    /// Counters only move forward: each is advanced by the difference to
    /// the snapshot value.
    pub fn update(&self, snapshot: &PoolSnapshot) {
        self.capacity.set(snapshot.capacity as i64);
        self.idle.set(snapshot.idle as i64);

        advance(&self.reused_total, snapshot.reused);
        advance(&self.allocated_total, snapshot.allocated);
        advance(&self.returned_total, snapshot.returned);
        advance(&self.discarded_total, snapshot.discarded);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, target: u64) {
    let current = counter.get();
    if target > current {
        counter.inc_by(target - current);
    }
}
