//! Population owner and per-tick driver.
//!
//! A tick runs in two phases. First every particle moves, ages its
//! infection and bounces off the walls. Then every unordered pair `(i, j)`
//! with `i < j` is checked in lexicographic order, so a particle infected
//! early in the scan can pass the disease on later in the same tick.

use std::f64::consts::TAU;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{SimulationConfig, WorldConfig};
use crate::error::{Result, SimulationError};
use crate::metrics::{Census, Metrics};
use crate::particle::{ParticleLogic, Transmission};
use crate::snapshot::{ParticleSnapshot, SimulationSnapshot};
use contagion_data::{Particle, Vector2};

#[derive(Debug)]
pub struct Simulation {
    particles: Vec<Particle>,
    tick: u64,
    config: SimulationConfig,
    metrics: Metrics,
    completed_at: Option<u64>,
}

impl Simulation {
    /// Builds a population on the default plane with an entropy-seeded RNG.
    pub fn new(
        cells: usize,
        speed: f64,
        initial_infections: i64,
        initial_immune: i64,
    ) -> Result<Self> {
        let config =
            SimulationConfig::with_population(cells, speed, initial_infections, initial_immune);
        Self::from_config(config)
    }

    /// Seeds from `config.population.seed`, or from entropy when unset.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        let mut rng = if let Some(seed) = config.population.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, &mut rng)
    }

    /// Builds the initial population, drawing every random value from `rng`.
    ///
    /// Particle `i` starts infected when `i < initial_infections` and is then
    /// made immune when `i < initial_immune`, so overlapping low indices end
    /// up immune.
    pub fn with_rng<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self> {
        config.check_parameters()?;
        config.check_population()?;

        let pop = &config.population;
        let particles = (0..pop.cells)
            .map(|i| {
                let velocity = Self::random_direction(pop.speed, &mut *rng);
                let position = Self::random_location(&config.world, &mut *rng);
                let mut particle = Particle::new(position, velocity);
                let index = i as i64;
                if index < pop.initial_infections {
                    particle.contract_disease();
                }
                if index < pop.initial_immune {
                    particle.immunize();
                }
                particle
            })
            .collect();

        tracing::info!(
            cells = pop.cells,
            speed = pop.speed,
            initial_infections = pop.initial_infections,
            initial_immune = pop.initial_immune,
            "Simulation created"
        );

        Ok(Self::assemble(config, particles))
    }

    /// Uses the given particles as the population, skipping random placement.
    ///
    /// The population counts in `config` are ignored; everything else is
    /// still validated.
    pub fn from_particles(config: SimulationConfig, particles: Vec<Particle>) -> Result<Self> {
        config.check_parameters()?;
        if particles.iter().any(|p| !p.position.is_finite() || !p.velocity.is_finite()) {
            return Err(SimulationError::invalid_parameter(
                "Particle position and velocity must be finite",
            ));
        }
        Ok(Self::assemble(config, particles))
    }

    fn assemble(config: SimulationConfig, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            tick: 0,
            config,
            metrics: Metrics::new(),
            completed_at: None,
        }
    }

    /// Uniform point in `[min_x, max_x) x [min_y, max_y)`.
    pub fn random_location<R: Rng + ?Sized>(world: &WorldConfig, rng: &mut R) -> Vector2 {
        let x = rng.gen::<f64>() * world.width() + world.min_x;
        let y = rng.gen::<f64>() * world.height() + world.min_y;
        Vector2::new(x, y)
    }

    /// Velocity of length `speed` in a uniformly random direction.
    pub fn random_direction<R: Rng + ?Sized>(speed: f64, rng: &mut R) -> Vector2 {
        let angle = TAU * rng.gen::<f64>();
        Vector2::from_polar(angle, speed)
    }

    /// Advances the simulation by one tick.
    pub fn advance(&mut self) {
        let started = Instant::now();
        self.tick += 1;

        let world = self.config.world;
        let recovery_period = self.config.disease.recovery_period;
        for particle in &mut self.particles {
            particle.tick(recovery_period);
            if Self::enforce_bounds(&world, particle) {
                self.metrics.record_reflection();
            }
        }

        let new_infections = self.check_contacts();
        let census = self.census();
        self.metrics
            .record_tick(started.elapsed(), census, new_infections);

        if census.infected == 0 && self.completed_at.is_none() {
            self.completed_at = Some(self.tick);
            tracing::info!(
                tick = self.tick,
                susceptible = census.susceptible,
                immune = census.immune,
                transmissions = self.metrics.transmissions(),
                elapsed_ms = self.metrics.elapsed().as_millis() as u64,
                "Simulation complete"
            );
        }
    }

    /// Reverses each velocity component whose coordinate lies outside `world`.
    ///
    /// Position is left untouched, so a particle may stay outside for one more
    /// tick. Returns `true` when any component was flipped.
    pub fn enforce_bounds(world: &WorldConfig, particle: &mut Particle) -> bool {
        let mut reflected = false;
        let pos = particle.position;
        if pos.x > world.max_x || pos.x < world.min_x {
            particle.velocity.x *= -1.0;
            reflected = true;
        }
        if pos.y > world.max_y || pos.y < world.min_y {
            particle.velocity.y *= -1.0;
            reflected = true;
        }
        if reflected {
            tracing::trace!(x = pos.x, y = pos.y, "Particle reflected");
        }
        reflected
    }

    /// Scans every pair `i < j` and applies the contact rule to those within
    /// the contact radius. Returns the number of new infections.
    fn check_contacts(&mut self) -> u64 {
        let radius = self.config.disease.contact_radius;
        let mut transfers = 0;
        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let first = &mut head[i];
            for (offset, second) in tail.iter_mut().enumerate() {
                if first.position.distance(second.position) >= radius {
                    continue;
                }
                if let Some(direction) = first.resolve_contact(second) {
                    transfers += 1;
                    let j = i + 1 + offset;
                    let (from, to) = match direction {
                        Transmission::Outbound => (i, j),
                        Transmission::Inbound => (j, i),
                    };
                    tracing::debug!(tick = self.tick, from, to, "Infection transmitted");
                }
            }
        }
        transfers
    }

    /// `true` once no particle is infected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.particles.iter().any(|p| p.is_infected())
    }

    /// Advances until complete or until `max_ticks` more ticks have run.
    ///
    /// Returns the tick at which the simulation completed.
    pub fn run_until_complete(&mut self, max_ticks: u64) -> Option<u64> {
        for _ in 0..max_ticks {
            if self.is_complete() {
                break;
            }
            self.advance();
        }
        if self.is_complete() {
            Some(self.tick)
        } else {
            tracing::warn!(tick = self.tick, max_ticks, "Tick limit reached before completion");
            None
        }
    }

    /// Tick on which the last infection cleared, if it has.
    #[must_use]
    pub fn completed_at(&self) -> Option<u64> {
        self.completed_at
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn census(&self) -> Census {
        Census::from_states(self.particles.iter().map(|p| p.health))
    }

    #[must_use]
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            tick: self.tick,
            complete: self.is_complete(),
            census: self.census(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleSnapshot {
                    x: p.position.x,
                    y: p.position.y,
                    color: p.color(),
                    rgb: p.color().rgb(),
                })
                .collect(),
        }
    }
}
