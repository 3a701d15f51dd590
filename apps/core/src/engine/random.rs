//! Random selection for the engine.
//!
//! Every random draw the generator and analyzer make goes through
//! [`RandomSource`], so callers can swap the thread RNG for a seeded one or
//! for a scripted sequence that pins exact template and index choices.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is always greater than zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Unseeded source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, each reduced modulo the requested bound.
///
/// Once the script is exhausted every further draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.draws.pop_front().map_or(0, |d| d % bound)
    }
}

/// Picks up to `count` distinct indices from `0..len`, sampling without
/// replacement. Each draw chooses among the indices still available.
pub fn pick_distinct<R: RandomSource + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut available: Vec<usize> = (0..len).collect();
    let mut picked = Vec::with_capacity(count.min(len));

    while picked.len() < count && !available.is_empty() {
        let slot = rng.next_index(available.len());
        picked.push(available.remove(slot));
    }

    picked
}

/// Picks one item from a non-empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}
