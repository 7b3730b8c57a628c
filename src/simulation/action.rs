//! Movement resolution
//!
//! Every mobile agent first vets its heading against the obstacle grid,
//! resampling a random direction until the cell ahead is open street. Only
//! then does its movement policy decide whether the step is taken: sprinting
//! agents always move, wandering agents roll a three-band die, and holding
//! agents never reach this code at all.

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{Cell, Direction};
use crate::simulation::agent::{Agent, AgentState, MovePolicy};
use crate::world::Grid;
use rand::Rng;

/// Resample the agent's direction until the cell ahead is open, returning
/// that cell
///
/// Cells beyond the grid edge count as blocked. An agent with no open
/// neighbour would resample forever, so the retry is capped and reported as
/// `ImpassableAgent`.
fn resolve_heading<S, R: Rng>(
    agent: &mut Agent<S>,
    grid: &Grid,
    retry_limit: u32,
    rng: &mut R,
) -> Result<Cell> {
    let mut attempts = 0;
    loop {
        if let Some(next) = agent.position.step(agent.direction) {
            if grid.get(next.row, next.col) == Some(false) {
                return Ok(next);
            }
        }
        if attempts >= retry_limit {
            return Err(SimError::ImpassableAgent {
                row: agent.position.row,
                col: agent.position.col,
                attempts,
            });
        }
        agent.direction = Direction::random(rng);
        attempts += 1;
    }
}

/// Apply one tick of movement to a single agent
pub fn act<S: AgentState, R: Rng>(
    agent: &mut Agent<S>,
    grid: &Grid,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<()> {
    match agent.state.move_policy() {
        MovePolicy::Hold => Ok(()),
        MovePolicy::Sprint => {
            agent.position = resolve_heading(agent, grid, config.wall_retry_limit, rng)?;
            Ok(())
        }
        MovePolicy::Wander => {
            let target = resolve_heading(agent, grid, config.wall_retry_limit, rng)?;
            let roll = rng.gen_range(0..100u32);
            if roll < config.roam_turn_chance {
                // Fresh aim without moving; the new direction is vetted on
                // the next tick, not this one.
                agent.direction = Direction::random(rng);
            } else if roll < config.roam_move_chance {
                agent.position = target;
            }
            Ok(())
        }
    }
}
