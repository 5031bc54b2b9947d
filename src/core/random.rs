//! Injectable randomness for the few places the site rolls dice
//!
//! The greeting picker, the simulated submission outcome, and the chatbot
//! reply delay all draw uniform values. Routing the draws through a trait
//! keeps every random-dependent path reproducible in tests.

/// Source of uniform random values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len - 1)
    }
}

/// `Math.random()`-backed source used by the hydrated client.
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

#[cfg(not(feature = "ssr"))]
impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed sequence of draws, cycling once exhausted.
///
/// An empty sequence draws `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source that returns the same draw every time.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replay_and_cycle() {
        let mut rng = ScriptedRandom::new([0.1, 0.5, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.9);
        // Wraps around
        assert_eq!(rng.next_unit(), 0.1);
    }

    #[test]
    fn test_constant_source() {
        let mut rng = ScriptedRandom::constant(0.42);
        assert_eq!(rng.next_unit(), 0.42);
        assert_eq!(rng.next_unit(), 0.42);
    }

    #[test]
    fn test_empty_sequence_draws_zero() {
        let mut rng = ScriptedRandom::new([]);
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_pick_index_covers_range() {
        let mut low = ScriptedRandom::constant(0.0);
        assert_eq!(low.pick_index(3), 0);

        let mut mid = ScriptedRandom::constant(0.5);
        assert_eq!(mid.pick_index(3), 1);

        let mut high = ScriptedRandom::constant(0.999);
        assert_eq!(high.pick_index(3), 2);
    }

    #[test]
    fn test_pick_index_never_exceeds_len() {
        // Even a draw at the top of the range stays in bounds
        let mut rng = ScriptedRandom::constant(0.999_999_999);
        for len in 1..=5 {
            assert!(rng.pick_index(len) < len);
        }
        assert_eq!(ScriptedRandom::constant(0.7).pick_index(0), 0);
    }
}
