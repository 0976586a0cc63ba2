//! Plain data types shared by the contagion engine and its consumers.

pub mod data;

pub use data::health::{Color, HealthState, IMMUNE, INFECTED, VULNERABLE};
pub use data::particle::Particle;
pub use data::vector::Vector2;
