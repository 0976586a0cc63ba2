pub use contagion_data::{Color, HealthState, Particle, Vector2};

/// Which side of a contact picked up the disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    /// The first particle infected the second.
    Outbound,
    /// The second particle infected the first.
    Inbound,
}

pub trait ParticleLogic {
    /// Moves by one velocity step and advances the infection clock.
    fn tick(&mut self, recovery_period: i32);
    fn color(&self) -> Color;
    fn contract_disease(&mut self);
    fn immunize(&mut self);
    fn is_susceptible(&self) -> bool;
    fn is_infected(&self) -> bool;
    fn is_immune(&self) -> bool;
    /// Passes the disease between an infected and a susceptible particle.
    ///
    /// At most one side changes. Pairs that are both infected, both
    /// susceptible, or involve an immune particle are left alone.
    fn resolve_contact(&mut self, other: &mut Self) -> Option<Transmission>;
}

impl ParticleLogic for Particle {
    fn tick(&mut self, recovery_period: i32) {
        self.position = self.position.add(self.velocity);
        if let HealthState::Infected { sickness } = self.health {
            // Past the recovery period the counter leaves every band.
            self.health = HealthState::from_sickness(sickness + 1, recovery_period)
                .unwrap_or(HealthState::Immune);
        }
    }

    fn color(&self) -> Color {
        Color::from(self.health)
    }

    fn contract_disease(&mut self) {
        self.health = HealthState::FRESH_INFECTION;
    }

    fn immunize(&mut self) {
        self.health = HealthState::Immune;
    }

    fn is_susceptible(&self) -> bool {
        self.health.is_susceptible()
    }

    fn is_infected(&self) -> bool {
        self.health.is_infected()
    }

    fn is_immune(&self) -> bool {
        self.health.is_immune()
    }

    fn resolve_contact(&mut self, other: &mut Self) -> Option<Transmission> {
        if self.is_infected() && other.is_susceptible() {
            other.contract_disease();
            Some(Transmission::Outbound)
        } else if other.is_infected() && self.is_susceptible() {
            self.contract_disease();
            Some(Transmission::Inbound)
        } else {
            None
        }
    }
}
