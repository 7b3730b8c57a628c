//! Nearest-opponent queries
//!
//! Populations are small enough that a linear Manhattan scan beats any
//! index structure; ties resolve to the earliest agent in population order,
//! which keeps runs reproducible.

use crate::core::error::{Result, SimError};
use crate::core::types::Cell;
use crate::simulation::agent::Population;

/// Distance and position of the closest opponent to `origin`
///
/// Fails with `EmptyPopulationQuery` when there is no opponent to measure;
/// callers are expected to skip perception entirely for empty populations.
pub fn nearest_opponent<S>(origin: Cell, opponents: &Population<S>) -> Result<(usize, Cell)> {
    let mut best: Option<(usize, Cell)> = None;
    for agent in opponents.iter() {
        let dist = origin.manhattan(&agent.position);
        match best {
            Some((best_dist, _)) if best_dist <= dist => {}
            _ => best = Some((dist, agent.position)),
        }
    }
    best.ok_or(SimError::EmptyPopulationQuery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;
    use crate::simulation::agent::{Agent, PursuerState};

    fn pursuers_at(cells: &[(usize, usize)]) -> Population<PursuerState> {
        Population::from_agents(
            cells
                .iter()
                .map(|&(row, col)| Agent {
                    position: Cell::new(row, col),
                    direction: Direction::Up,
                    state: PursuerState::Roam,
                })
                .collect(),
        )
    }

    #[test]
    fn test_nearest_picks_minimum_distance() {
        let opponents = pursuers_at(&[(0, 9), (3, 3), (8, 8)]);
        let (dist, cell) = nearest_opponent(Cell::new(2, 2), &opponents).unwrap();
        assert_eq!(dist, 2);
        assert_eq!(cell, Cell::new(3, 3));
    }

    #[test]
    fn test_tie_goes_to_earliest_in_population_order() {
        let opponents = pursuers_at(&[(0, 2), (2, 0)]);
        let (dist, cell) = nearest_opponent(Cell::new(0, 0), &opponents).unwrap();
        assert_eq!(dist, 2);
        assert_eq!(cell, Cell::new(0, 2));
    }

    #[test]
    fn test_empty_population_is_an_error() {
        let opponents: Population<PursuerState> = Population::new();
        assert!(matches!(
            nearest_opponent(Cell::new(0, 0), &opponents),
            Err(SimError::EmptyPopulationQuery)
        ));
    }

    #[test]
    fn test_same_cell_distance_zero() {
        let opponents = pursuers_at(&[(4, 4)]);
        let (dist, cell) = nearest_opponent(Cell::new(4, 4), &opponents).unwrap();
        assert_eq!(dist, 0);
        assert_eq!(cell, Cell::new(4, 4));
    }
}
