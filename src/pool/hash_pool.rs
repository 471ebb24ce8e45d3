//! Bounded pool of reusable hash states.
//!
//! Hands out [`HashState`] objects without ever blocking the caller. An
//! empty or contended pool allocates a transient state; a full or
//! contended pool drops the returned state.

use super::config::PoolConfig;
use super::state::HashState;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters of pool activity.
#[derive(Debug, Default)]
struct PoolStats {
    reused: AtomicU64,
    allocated: AtomicU64,
    returned: AtomicU64,
    discarded: AtomicU64,
}

/// Point-in-time view of pool activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Fixed pool capacity.
    pub capacity: usize,
    /// States currently idle in the pool.
    pub idle: usize,
    /// Acquisitions served from the pool.
    pub reused: u64,
    /// Acquisitions served by a transient allocation.
    pub allocated: u64,
    /// Releases that went back into the pool.
    pub returned: u64,
    /// Releases that were dropped.
    pub discarded: u64,
}

impl PoolSnapshot {
    /// Total number of acquisitions.
    pub fn acquisitions(&self) -> u64 {
        self.reused + self.allocated
    }

    /// Total number of releases.
    pub fn releases(&self) -> u64 {
        self.returned + self.discarded
    }
}

/// A fixed-capacity pool of [`HashState`] objects.
///
/// Capacity is fixed at construction. A capacity of zero disables pooling:
/// every acquisition allocates and every release discards, without ever
/// touching the lock.
pub struct HashPool {
    /// Idle states.
    slots: Mutex<Vec<HashState>>,
    /// Maximum number of idle states.
    capacity: usize,
    stats: PoolStats,
}

impl HashPool {
    /// Creates a pool pre-populated with `capacity` states.
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| HashState::new()).collect();

        tracing::debug!(capacity, "Created hash-state pool");

        Self {
            slots: Mutex::new(slots),
            capacity,
            stats: PoolStats::default(),
        }
    }

    /// Creates a pool from configuration.
    pub fn from_config(config: &PoolConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Takes an idle state, or allocates a transient one.
    ///
    /// Never blocks: a contended pool is treated as empty.
    pub fn acquire(&self) -> HashState {
        if self.capacity > 0 {
            if let Some(state) = self.slots.try_lock().and_then(|mut slots| slots.pop()) {
                self.stats.reused.fetch_add(1, Ordering::Relaxed);
                return state;
            }
        }

        self.stats.allocated.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(capacity = self.capacity, "Hash-state pool empty, allocating");
        HashState::new()
    }

    /// Resets `state` and returns it to the pool, or drops it if the pool
    /// is full.
    ///
    /// Never blocks: a contended pool is treated as full.
    pub fn release(&self, mut state: HashState) {
        state.reset();

        if self.capacity > 0 {
            if let Some(mut slots) = self.slots.try_lock() {
                if slots.len() < self.capacity {
                    slots.push(state);
                    self.stats.returned.fetch_add(1, Ordering::Relaxed);
                    return;
                }
            }
        }

        self.stats.discarded.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(id = state.id(), "Hash-state pool full, discarding");
    }

    /// Acquires a state that is released automatically when dropped.
    pub fn lease(&self) -> PooledHashState<'_> {
        PooledHashState {
            pool: self,
            state: Some(self.acquire()),
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of idle states.
    ///
    /// This takes the lock and may wait briefly; it is meant for
    /// diagnostics, not for the draw path.
    pub fn idle(&self) -> usize {
        self.slots.lock().len()
    }

    /// Returns a snapshot of pool activity.
    pub fn stats(&self) -> PoolSnapshot {
        PoolSnapshot {
            capacity: self.capacity,
            idle: self.idle(),
            reused: self.stats.reused.load(Ordering::Relaxed),
            allocated: self.stats.allocated.load(Ordering::Relaxed),
            returned: self.stats.returned.load(Ordering::Relaxed),
            discarded: self.stats.discarded.load(Ordering::Relaxed),
        }
    }
}

impl Default for HashPool {
    fn default() -> Self {
        Self::from_config(&PoolConfig::default())
    }
}

impl std::fmt::Debug for HashPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPool")
            .field("capacity", &self.capacity)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// A [`HashState`] on loan from a [`HashPool`].
///
/// Dereferences to the state and releases it on drop.
pub struct PooledHashState<'a> {
    pool: &'a HashPool,
    state: Option<HashState>,
}

impl Deref for PooledHashState<'_> {
    type Target = HashState;

    fn deref(&self) -> &HashState {
        // Only taken in drop.
        self.state.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl DerefMut for PooledHashState<'_> {
    fn deref_mut(&mut self) -> &mut HashState {
        self.state.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl Drop for PooledHashState<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            self.pool.release(state);
        }
    }
}
