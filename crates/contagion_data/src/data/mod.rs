//! Core data structures for the contagion simulation.

pub mod health;
pub mod particle;
pub mod vector;
