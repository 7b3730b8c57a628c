//! Per-tick state machine transitions
//!
//! Each agent re-evaluates its state from the current distance to the
//! nearest opponent. Prey within the pursuit radius start fleeing, prey
//! sharing a cell with a pursuer are marked captured, and pursuers within
//! the radius lock on. The radius is exclusive: an opponent exactly
//! `pursuit_radius` away does not trigger either reaction.

use crate::core::error::Result;
use crate::core::types::{Cell, Direction};
use crate::simulation::agent::{Population, PreyState, PursuerState};
use crate::simulation::spatial::nearest_opponent;
use rand::Rng;

/// Axis directions pointing from `origin` at `target`, with any zero-delta
/// axis dropped; empty only when the cells coincide
fn axis_directions(origin: Cell, target: Cell) -> Vec<Direction> {
    let mut out = Vec::with_capacity(2);
    if target.row > origin.row {
        out.push(Direction::Down);
    } else if target.row < origin.row {
        out.push(Direction::Up);
    }
    if target.col > origin.col {
        out.push(Direction::Right);
    } else if target.col < origin.col {
        out.push(Direction::Left);
    }
    out
}

fn aim_at<R: Rng>(origin: Cell, target: Cell, rng: &mut R) -> Option<Direction> {
    let candidates = axis_directions(origin, target);
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Re-evaluate every prey agent against the pursuer population
///
/// A no-op when there are no pursuers: prey keep roaming undisturbed.
pub fn perceive_prey<R: Rng>(
    prey: &mut Population<PreyState>,
    pursuers: &Population<PursuerState>,
    pursuit_radius: usize,
    rng: &mut R,
) -> Result<()> {
    if pursuers.is_empty() {
        return Ok(());
    }
    for agent in prey.iter_mut() {
        let (dist, nearest) = nearest_opponent(agent.position, pursuers)?;
        if dist == 0 {
            agent.state = PreyState::Captured;
        } else if dist < pursuit_radius {
            agent.state = PreyState::Flee;
            if let Some(direction) = aim_at(agent.position, nearest, rng) {
                agent.direction = direction;
            }
        } else {
            agent.state = PreyState::Roam;
        }
    }
    Ok(())
}

/// Re-evaluate every pursuer against the prey population
///
/// A pursuer standing on its target keeps its current direction; the
/// capture rule resolves that encounter at the end of the tick.
pub fn perceive_pursuers<R: Rng>(
    pursuers: &mut Population<PursuerState>,
    prey: &Population<PreyState>,
    pursuit_radius: usize,
    rng: &mut R,
) -> Result<()> {
    if prey.is_empty() {
        return Ok(());
    }
    for agent in pursuers.iter_mut() {
        let (dist, nearest) = nearest_opponent(agent.position, prey)?;
        if dist < pursuit_radius {
            agent.state = PursuerState::Hunt;
            if let Some(direction) = aim_at(agent.position, nearest, rng) {
                agent.direction = direction;
            }
        } else {
            agent.state = PursuerState::Roam;
        }
    }
    Ok(())
}
