//! World state: grid, populations, RNG and tick counter

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{Direction, Tick};
use crate::simulation::agent::{Agent, Population, PreyState, PursuerState};
use crate::world::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// The complete mutable state of one simulation run
///
/// All randomness flows through the single seeded RNG, so two worlds built
/// from the same grid, config and seed evolve identically.
pub struct World {
    pub grid: Grid,
    pub prey: Population<PreyState>,
    pub pursuers: Population<PursuerState>,
    pub rng: ChaCha8Rng,
    pub current_tick: Tick,
}

impl World {
    /// Build a world with both populations spawned uniformly over the open
    /// cells of `grid`
    ///
    /// Prey are placed before pursuers. Multiple agents may share a spawn
    /// cell; a pursuer landing on a prey simply resolves as a capture on
    /// the first tick.
    pub fn new(grid: Grid, config: &SimulationConfig, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let open = grid.open_cells();
        if open.is_empty() {
            return Err(SimError::NoOpenCells);
        }

        let mut prey_agents = Vec::with_capacity(config.prey_count);
        for _ in 0..config.prey_count {
            prey_agents.push(Agent {
                position: open[rng.gen_range(0..open.len())],
                direction: Direction::random(&mut rng),
                state: PreyState::Roam,
            });
        }

        let mut pursuer_agents = Vec::with_capacity(config.pursuer_count);
        for _ in 0..config.pursuer_count {
            pursuer_agents.push(Agent {
                position: open[rng.gen_range(0..open.len())],
                direction: Direction::random(&mut rng),
                state: PursuerState::Roam,
            });
        }

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            open_cells = open.len(),
            prey = prey_agents.len(),
            pursuers = pursuer_agents.len(),
            seed,
            "world spawned"
        );

        Ok(Self {
            grid,
            prey: Population::from_agents(prey_agents),
            pursuers: Population::from_agents(pursuer_agents),
            rng,
            current_tick: 0,
        })
    }

    pub fn total_agents(&self) -> usize {
        self.prey.len() + self.pursuers.len()
    }
}
