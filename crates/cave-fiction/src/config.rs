//! Configuration for an adventure session.

/// Tuning for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// RNG seed for reproducible sessions.
    pub seed: u64,
    /// Per-turn chance that waiting dwarves wake up.
    pub activation_chance: f64,
    /// Chance that a thrown knife hits.
    pub hit_chance: f64,
    /// Chance that the player kills a dwarf when attacking.
    pub kill_chance: f64,
    /// Consecutive unknown words before a hint is offered.
    pub frustration_threshold: u32,
    /// Visits between long room descriptions.
    pub abbreviation_cycle: u32,
    /// Full-length WEST commands before the abbreviation tip.
    pub west_tip_after: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            activation_chance: 0.05,
            hit_chance: 0.10,
            kill_chance: 0.40,
            frustration_threshold: 3,
            abbreviation_cycle: 5,
            west_tip_after: 10,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the dwarf activation chance (clamped to 0-1).
    pub fn with_activation_chance(mut self, chance: f64) -> Self {
        self.activation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the knife hit chance (clamped to 0-1).
    pub fn with_hit_chance(mut self, chance: f64) -> Self {
        self.hit_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the dwarf kill chance (clamped to 0-1).
    pub fn with_kill_chance(mut self, chance: f64) -> Self {
        self.kill_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set how many unknown words trigger a hint (at least 1).
    pub fn with_frustration_threshold(mut self, threshold: u32) -> Self {
        self.frustration_threshold = threshold.max(1);
        self
    }

    /// Set the long-description cycle (at least 1).
    pub fn with_abbreviation_cycle(mut self, cycle: u32) -> Self {
        self.abbreviation_cycle = cycle.max(1);
        self
    }

    /// Set how many full WEST commands precede the tip (at least 1).
    pub fn with_west_tip_after(mut self, count: u32) -> Self {
        self.west_tip_after = count.max(1);
        self
    }
}
