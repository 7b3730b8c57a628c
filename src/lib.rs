//! City Pursuit - grid-bound predator/prey street simulation

pub mod core;
pub mod render;
pub mod simulation;
pub mod world;
