//! Per-tick orchestration
//!
//! A tick runs four phases in fixed order: prey perception, pursuer
//! perception, movement for every agent (prey first, in population order),
//! then capture resolution. Perception for both sides reads positions from
//! the start of the tick; movement happens strictly afterwards.

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Tick;
use crate::simulation::{action, capture, perception, world::World};
use tracing::{debug, info};

/// Whether the simulation can keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Every prey has been converted; the world is inert from here on
    PreyExtinct,
}

/// Summary of one tick, for logging and the renderer's status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,
    pub captures: usize,
    pub prey_remaining: usize,
    pub pursuer_count: usize,
    pub outcome: TickOutcome,
}

/// Advance the world by one tick
///
/// Once the prey population is empty the world is terminal: the report
/// says so and the tick counter stops advancing.
pub fn run_simulation_tick(world: &mut World, config: &SimulationConfig) -> Result<TickReport> {
    if world.prey.is_empty() {
        return Ok(TickReport {
            tick: world.current_tick,
            captures: 0,
            prey_remaining: 0,
            pursuer_count: world.pursuers.len(),
            outcome: TickOutcome::PreyExtinct,
        });
    }

    world.current_tick += 1;

    perception::perceive_prey(
        &mut world.prey,
        &world.pursuers,
        config.pursuit_radius,
        &mut world.rng,
    )?;
    perception::perceive_pursuers(
        &mut world.pursuers,
        &world.prey,
        config.pursuit_radius,
        &mut world.rng,
    )?;

    for agent in world.prey.iter_mut() {
        action::act(agent, &world.grid, config, &mut world.rng)?;
    }
    for agent in world.pursuers.iter_mut() {
        action::act(agent, &world.grid, config, &mut world.rng)?;
    }

    let captures = capture::resolve_captures(&mut world.prey, &mut world.pursuers);
    if captures > 0 {
        debug!(
            tick = world.current_tick,
            captures,
            prey_remaining = world.prey.len(),
            "prey captured"
        );
    }

    let outcome = if world.prey.is_empty() {
        info!(
            tick = world.current_tick,
            pursuers = world.pursuers.len(),
            "prey extinct"
        );
        TickOutcome::PreyExtinct
    } else {
        TickOutcome::Running
    };

    Ok(TickReport {
        tick: world.current_tick,
        captures,
        prey_remaining: world.prey.len(),
        pursuer_count: world.pursuers.len(),
        outcome,
    })
}
