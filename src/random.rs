//! Sources of uniform random indices consumed by the generator.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Produces uniformly distributed integers in `[0, bound)`.
///
/// Returns `None` when the source cannot produce a value, which aborts generation.
pub trait RandomSource {
    fn next_below(&mut self, bound: usize) -> Option<usize>;
}

impl<R: RngCore> RandomSource for R {
    fn next_below(&mut self, bound: usize) -> Option<usize> {
        if bound == 0 {
            return None;
        }
        Some(self.random_range(0..bound))
    }
}

/// Replays a fixed list of draws, then runs dry.
///
/// Values are returned as given, so a value that is not below the requested bound is
/// passed through to the caller unchanged.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<usize>,
    next: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            next: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Repeat `values` until `len` draws are available.
    pub fn cycled(values: &[usize], len: usize) -> Self {
        Self::new(values.iter().copied().cycle().take(len).collect::<Vec<_>>())
    }
}

impl RandomSource for FixedSequence {
    fn next_below(&mut self, _bound: usize) -> Option<usize> {
        let value = self.values.get(self.next).copied()?;
        self.next += 1;
        Some(value)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
