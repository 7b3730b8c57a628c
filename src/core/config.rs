//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::Deserialize;
use std::path::Path;

/// Configuration for the simulation
///
/// Defaults give the standard scenario: 500 prey, one pursuer, and a
/// pursuit radius of 5 on a street map with 3-cell-wide streets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === PERCEPTION ===
    /// Manhattan distance below which prey flee and pursuers hunt
    ///
    /// Exclusive: an opponent exactly this far away is ignored. Distance 0
    /// is a capture for prey.
    pub pursuit_radius: usize,

    // === POPULATIONS ===
    /// Initial prey population size
    pub prey_count: usize,

    /// Initial pursuer population size
    pub pursuer_count: usize,

    // === MOVEMENT ===
    /// Width of the re-aim band for roaming agents
    ///
    /// A per-tick roll in [0, 100) below this value makes the agent pick a
    /// fresh random direction without moving.
    pub roam_turn_chance: u32,

    /// Upper bound of the movement band for roaming agents
    ///
    /// Rolls in [roam_turn_chance, roam_move_chance) step one cell; the
    /// remainder up to 100 holds still. At the defaults (10/70) a roaming
    /// agent re-aims 10%, moves 60% and rests 30% of the time.
    pub roam_move_chance: u32,

    /// Attempt cap for the wall-avoidance retry
    ///
    /// An agent that cannot find an open neighbour within this many random
    /// resamples is reported as fully enclosed instead of spinning forever.
    /// With one open neighbour the retry misses all 64 attempts with
    /// probability (3/4)^64, i.e. never in practice.
    pub wall_retry_limit: u32,

    // === MAP ===
    /// Cells per map segment, horizontally and vertically
    ///
    /// Each tab-delimited segment of the input file expands to a square
    /// block this wide, so streets are `street_width` agents wide.
    pub street_width: usize,

    // === PACING ===
    /// Delay between ticks in interactive mode, in milliseconds
    ///
    /// A courtesy to the renderer; carries no correctness obligation.
    pub tick_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pursuit_radius: 5,
            prey_count: 500,
            pursuer_count: 1,
            roam_turn_chance: 10,
            roam_move_chance: 70,
            wall_retry_limit: 64,
            street_width: 3,
            tick_delay_ms: 5,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a TOML file on top of the defaults
    pub fn from_toml_file(path: &Path) -> crate::core::error::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.pursuit_radius == 0 {
            return Err("pursuit_radius must be at least 1".into());
        }

        // Bands must be ordered and fit the [0, 100) roll
        if self.roam_turn_chance >= self.roam_move_chance {
            return Err(format!(
                "roam_turn_chance ({}) must be < roam_move_chance ({})",
                self.roam_turn_chance, self.roam_move_chance
            ));
        }
        if self.roam_move_chance > 100 {
            return Err(format!(
                "roam_move_chance ({}) must be <= 100",
                self.roam_move_chance
            ));
        }

        if self.wall_retry_limit == 0 {
            return Err("wall_retry_limit must be at least 1".into());
        }

        if self.street_width == 0 {
            return Err("street_width must be at least 1".into());
        }

        Ok(())
    }
}
