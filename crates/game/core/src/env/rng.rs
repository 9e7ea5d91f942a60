//! RNG oracle for injected random number generation.
//!
//! The engine never touches a process-wide generator. Every draw (damage roll,
//! AI tactic, opponent archetype) goes through an [`RngOracle`] owned by the
//! controller, so tests and replays can script the exact sequence.

use std::collections::VecDeque;

/// Source of random draws for the engine.
pub trait RngOracle: Send {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Draw uniformly from `[0, bound)`. Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Scripted RNG that replays a fixed sequence of draws.
///
/// `next_below(bound)` returns the next scripted value reduced modulo
/// `bound`, so a script of `[19, 2]` yields a damage roll of 19 followed by
/// the third tactic. Once the script is exhausted every draw returns the
/// fallback value.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    draws: VecDeque<u32>,
    fallback: u32,
}

impl SequenceRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Value returned after the script runs out (builder pattern).
    #[must_use]
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends more draws to the end of the script.
    pub fn extend(&mut self, draws: impl IntoIterator<Item = u32>) {
        self.draws.extend(draws);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_below_reduces_modulo_bound() {
        let mut rng = SequenceRng::new([23, 7]);
        assert_eq!(rng.next_below(20), 3);
        assert_eq!(rng.next_below(0), 0);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn sequence_replays_then_falls_back() {
        let mut rng = SequenceRng::new([19, 2]).with_fallback(1);
        assert_eq!(rng.next_below(20), 19);
        assert_eq!(rng.next_below(3), 2);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.next_below(3), 1);
    }

    #[test]
    fn boxed_oracle_delegates() {
        let mut rng: Box<dyn RngOracle> = Box::new(SequenceRng::new([5]));
        assert_eq!(rng.next_below(20), 5);
    }
}
