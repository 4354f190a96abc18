use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

///
/// A source of uniformly distributed integers.
///
/// The chooser consumes exactly one value per pick. Thread safety of the
/// source is up to the implementation; a [`super::Chooser`] only ever needs
/// `&mut` access for the duration of a single draw.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, bound)`. `bound` is never 0.
    fn below(&mut self, bound: u64) -> u64;
}

impl RandomSource for ThreadRng {
    fn below(&mut self, bound: u64) -> u64 {
        self.gen_range(0..bound)
    }
}

impl RandomSource for StdRng {
    fn below(&mut self, bound: u64) -> u64 {
        self.gen_range(0..bound)
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u64) -> u64 {
        self.0.gen_range(0..bound)
    }
}

///
/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Each value is reduced modulo the requested bound, so a script of `[0, 5, 9]`
/// against a total of 10 draws 1, 6 and 10.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u64>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u64>) -> ScriptedSource {
        ScriptedSource {
            values,
            position: 0,
        }
    }

    /// How many values have been handed out so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: u64) -> u64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}
