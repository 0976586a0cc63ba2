//! # Contagion Core
//!
//! Simulation engine for contagion spreading through a population of moving
//! point particles inside a bounded plane.
//!
//! Each tick every particle moves by its velocity, bounces off the walls, and
//! then every pair of particles closer than the contact radius gets a chance to
//! pass the disease on. Infected particles recover into permanent immunity
//! after the recovery period, so every run eventually ends.
//!
//! ## Example
//!
//! ```
//! use contagion_core::config::SimulationConfig;
//! use contagion_core::Simulation;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut config = SimulationConfig::default();
//! config.population.cells = 10;
//! config.population.speed = 1.0;
//! config.population.initial_infections = 1;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut sim = Simulation::with_rng(config, &mut rng).unwrap();
//! while !sim.is_complete() {
//!     sim.advance();
//! }
//! assert!(sim.tick() > 0);
//! ```

/// Fixed constants and loadable simulation parameters
pub mod config;
/// Construction errors
pub mod error;
/// Tallies, tick metrics and structured logging setup
pub mod metrics;
/// Per-particle motion, health progression and contact rule
pub mod particle;
/// Population owner and per-tick driver
pub mod simulation;
/// Read-only frames for renderers and exporters
pub mod snapshot;

pub use error::{Result, SimulationError};
pub use metrics::{init_logging, Census, Metrics};
pub use particle::ParticleLogic;
pub use simulation::Simulation;
pub use snapshot::{ParticleSnapshot, SimulationSnapshot};

pub use contagion_data::{Color, HealthState, Particle, Vector2};
