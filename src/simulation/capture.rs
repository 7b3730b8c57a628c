//! Capture resolution and population migration
//!
//! Runs after movement: every prey marked captured this tick leaves the
//! prey population and re-enters play as a roaming pursuer. Converts are
//! spliced onto the head of the pursuer list as a block, oldest capture
//! first, so long-standing pursuers drift toward the tail over a run.

use crate::simulation::agent::{Agent, Population, PreyState, PursuerState};

/// Convert all captured prey into pursuers, returning how many converted
pub fn resolve_captures(
    prey: &mut Population<PreyState>,
    pursuers: &mut Population<PursuerState>,
) -> usize {
    let captured = prey.take_captured();
    let count = captured.len();
    if count > 0 {
        let converts = captured
            .into_iter()
            .map(|agent| Agent {
                position: agent.position,
                direction: agent.direction,
                state: PursuerState::Roam,
            })
            .collect();
        pursuers.insert_front(converts);
    }
    count
}
