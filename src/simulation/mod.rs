pub mod action;
pub mod agent;
pub mod capture;
pub mod perception;
pub mod spatial;
pub mod tick;
pub mod world;
