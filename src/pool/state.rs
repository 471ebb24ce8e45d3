//! Reusable hash-state objects.

use crate::entropy::Seed;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STATE_ID: AtomicU64 = AtomicU64::new(0);

/// Reusable computation context for mixing a seed into a 64-bit digest.
///
/// A state is keyed by the seed it is given and produces exactly one
/// digest per seed. It must be [`reset`](HashState::reset) before it is
/// handed to the next borrower; [`HashPool::release`](super::HashPool::release)
/// does this for you.
pub struct HashState {
    hasher: DefaultHasher,
    /// Process-unique identifier, stable for the lifetime of the state.
    id: u64,
    /// Digests computed since the last reset.
    pending: u32,
}

impl HashState {
    /// Creates a fresh, clean state.
    pub fn new() -> Self {
        Self {
            hasher: DefaultHasher::new(),
            id: NEXT_STATE_ID.fetch_add(1, Ordering::Relaxed),
            pending: 0,
        }
    }

    /// Keys the state with `seed` and returns the resulting digest.
    ///
    /// The seed is consumed: the digest depends only on it, never on what
    /// the state computed before.
    pub fn digest(&mut self, seed: Seed) -> u64 {
        self.hasher = seed.into_hasher();
        self.pending = self.pending.saturating_add(1);
        self.hasher.finish()
    }

    /// Clears any keyed state so the next borrower starts clean.
    pub fn reset(&mut self) {
        self.hasher = DefaultHasher::new();
        self.pending = 0;
    }

    /// Returns true if no digest has been computed since the last reset.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.pending == 0
    }

    /// Returns the process-unique id of this state.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HashState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashState")
            .field("id", &self.id)
            .field("clean", &self.is_clean())
            .finish_non_exhaustive()
    }
}
