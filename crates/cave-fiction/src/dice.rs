//! Injectable random source.
//!
//! Every random decision in a session (conditional travel, dwarf activation,
//! knife throws, combat, the "didn't understand" message) goes through one
//! [`Dice`] so tests can script the outcome.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of random draws.
pub trait Dice {
    /// A uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.draw() < p
    }

    /// An index in `0..n`. Returns 0 when `n` is 0.
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let index = (self.draw() * n as f64) as usize;
        index.min(n - 1)
    }
}

/// Seeded pseudo-random dice.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Dice seeded for reproducible sessions.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}

/// Dice that replay a fixed list of draws.
///
/// Once the script runs out every draw is `1.0`, so every chance fails and
/// every pick lands on the last index.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    draws: VecDeque<f64>,
}

impl ScriptedDice {
    /// Dice that return `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl Dice for ScriptedDice {
    fn draw(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(1.0)
    }
}
