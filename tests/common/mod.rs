use contagion_lib::model::config::SimulationConfig;
use contagion_lib::model::state::{HealthState, Particle, Vector2};
use contagion_lib::model::Simulation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: SimulationConfig,
    particles: Vec<Particle>,
    seed: u64,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            particles: Vec::new(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_population(mut self, cells: usize, speed: f64, infections: i64, immune: i64) -> Self {
        self.config.population.cells = cells;
        self.config.population.speed = speed;
        self.config.population.initial_infections = infections;
        self.config.population.initial_immune = immune;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Adds a particle at a fixed position; switches the build to explicit placement.
    pub fn with_particle(mut self, x: f64, y: f64, vx: f64, vy: f64, health: HealthState) -> Self {
        self.particles
            .push(Particle::new(Vector2::new(x, y), Vector2::new(vx, vy)).with_health(health));
        self
    }

    pub fn with_still(self, x: f64, y: f64, health: HealthState) -> Self {
        self.with_particle(x, y, 0.0, 0.0, health)
    }

    pub fn build(self) -> Simulation {
        if self.particles.is_empty() {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            Simulation::with_rng(self.config, &mut rng).expect("Failed to build simulation in test builder")
        } else {
            Simulation::from_particles(self.config, self.particles)
                .expect("Failed to build simulation in test builder")
        }
    }
}

#[allow(dead_code)]
pub fn infected() -> HealthState {
    HealthState::FRESH_INFECTION
}
