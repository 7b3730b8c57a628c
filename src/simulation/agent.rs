//! Agent records and population stores
//!
//! Each agent is a tagged record of position, direction and a
//! population-specific behavioral state. Populations are insertion-ordered
//! and mutated in place; agent identity is positional for the duration of
//! a tick, and only the capture migration removes or inserts records.

use crate::core::types::{Cell, Direction};

/// Behavioral states for prey agents
///
/// `Captured` is a terminal-for-tick marker: the capture rule migrates the
/// agent out of the prey population at the end of the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreyState {
    Roam,
    Flee,
    Captured,
}

/// Behavioral states for pursuer agents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuerState {
    Roam,
    Hunt,
}

/// How a state constrains movement in the action phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePolicy {
    /// Stochastic roaming: sometimes re-aim, sometimes step, sometimes rest
    Wander,
    /// Always step one cell
    Sprint,
    /// Never step
    Hold,
}

pub trait AgentState: Copy {
    fn move_policy(self) -> MovePolicy;
}

impl AgentState for PreyState {
    fn move_policy(self) -> MovePolicy {
        match self {
            PreyState::Roam => MovePolicy::Wander,
            PreyState::Flee => MovePolicy::Sprint,
            PreyState::Captured => MovePolicy::Hold,
        }
    }
}

impl AgentState for PursuerState {
    fn move_policy(self) -> MovePolicy {
        match self {
            PursuerState::Roam => MovePolicy::Wander,
            PursuerState::Hunt => MovePolicy::Sprint,
        }
    }
}

/// A positioned, directed, stateful entity belonging to one population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent<S> {
    pub position: Cell,
    pub direction: Direction,
    pub state: S,
}

/// Insertion-ordered agent collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<S> {
    agents: Vec<Agent<S>>,
}

impl<S> Default for Population<S> {
    fn default() -> Self {
        Self { agents: Vec::new() }
    }
}

impl<S> Population<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_agents(agents: Vec<Agent<S>>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent<S>> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent<S>> {
        self.agents.iter_mut()
    }

    pub fn agents(&self) -> &[Agent<S>] {
        &self.agents
    }
}

impl Population<PreyState> {
    /// Remove every captured agent, preserving the order of both the kept
    /// and the removed partitions
    pub fn take_captured(&mut self) -> Vec<Agent<PreyState>> {
        let (captured, kept) = std::mem::take(&mut self.agents)
            .into_iter()
            .partition(|agent| agent.state == PreyState::Captured);
        self.agents = kept;
        captured
    }
}

impl Population<PursuerState> {
    /// Insert converted agents as a block at the head, keeping their order
    /// and pushing existing pursuers to the tail
    pub fn insert_front(&mut self, mut converts: Vec<Agent<PursuerState>>) {
        converts.append(&mut self.agents);
        self.agents = converts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prey(row: usize, state: PreyState) -> Agent<PreyState> {
        Agent {
            position: Cell::new(row, 0),
            direction: Direction::Right,
            state,
        }
    }

    #[test]
    fn test_move_policy_mapping() {
        assert_eq!(PreyState::Roam.move_policy(), MovePolicy::Wander);
        assert_eq!(PreyState::Flee.move_policy(), MovePolicy::Sprint);
        assert_eq!(PreyState::Captured.move_policy(), MovePolicy::Hold);
        assert_eq!(PursuerState::Roam.move_policy(), MovePolicy::Wander);
        assert_eq!(PursuerState::Hunt.move_policy(), MovePolicy::Sprint);
    }

    #[test]
    fn test_take_captured_partitions_in_order() {
        let mut population = Population::from_agents(vec![
            prey(0, PreyState::Roam),
            prey(1, PreyState::Captured),
            prey(2, PreyState::Flee),
            prey(3, PreyState::Captured),
        ]);

        let captured = population.take_captured();

        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].position.row, 1);
        assert_eq!(captured[1].position.row, 3);
        assert_eq!(population.len(), 2);
        assert_eq!(population.agents()[0].position.row, 0);
        assert_eq!(population.agents()[1].position.row, 2);
    }

    #[test]
    fn test_insert_front_keeps_both_orders() {
        let pursuer = |row| Agent {
            position: Cell::new(row, 0),
            direction: Direction::Up,
            state: PursuerState::Roam,
        };
        let mut population = Population::from_agents(vec![pursuer(10), pursuer(11)]);

        population.insert_front(vec![pursuer(1), pursuer(2)]);

        let rows: Vec<usize> = population.iter().map(|a| a.position.row).collect();
        assert_eq!(rows, vec![1, 2, 10, 11]);
    }
}
