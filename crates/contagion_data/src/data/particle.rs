use super::health::HealthState;
use super::vector::Vector2;
use serde::{Deserialize, Serialize};

/// A moving point that can carry the contagion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub health: HealthState,
}

impl Particle {
    /// A susceptible particle at `position` moving by `velocity` each tick.
    #[must_use]
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            health: HealthState::Susceptible,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: HealthState) -> Self {
        self.health = health;
        self
    }
}
