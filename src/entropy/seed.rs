//! Single-use hash keys.

use std::collections::hash_map::{DefaultHasher, RandomState};
use std::hash::BuildHasher;

/// A freshly generated key for the entropy hash.
///
/// Backed by the standard library's randomly keyed SipHash. Every call to
/// [`Seed::fresh`] yields a different key, and a seed is consumed by the
/// digest it keys, so it can never be used twice.
pub struct Seed(RandomState);

impl Seed {
    /// Generates a new seed.
    #[inline]
    pub fn fresh() -> Self {
        Self(RandomState::new())
    }

    /// Builds a hasher keyed with this seed, consuming it.
    #[inline]
    pub(crate) fn into_hasher(self) -> DefaultHasher {
        self.0.build_hasher()
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed").finish_non_exhaustive()
    }
}
