//! Test doubles.

use crate::entropy::EntropySource;
use std::cell::Cell;

/// Replays a fixed sequence of draws, cycling when exhausted.
pub(crate) struct FixedSource<const N: usize> {
    draws: [u64; N],
    next: Cell<usize>,
}

impl<const N: usize> FixedSource<N> {
    pub(crate) fn new(draws: [u64; N]) -> Self {
        Self {
            draws,
            next: Cell::new(0),
        }
    }
}

impl<const N: usize> EntropySource for FixedSource<N> {
    fn next_u64(&self) -> u64 {
        let i = self.next.get();
        self.next.set((i + 1) % N);
        self.draws[i]
    }
}
