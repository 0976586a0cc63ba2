mod common;

use common::{infected, SimulationBuilder};
use contagion_lib::model::config::{SimulationConfig, WorldConfig, MAX_X, MIN_Y};
use contagion_lib::model::state::{HealthState, Particle, Vector2};
use contagion_lib::model::{ParticleLogic, Simulation};

#[test]
fn test_reflection_just_past_max_x() {
    let world = WorldConfig::default();
    let mut p = Particle::new(Vector2::new(MAX_X + 1e-9, 0.0), Vector2::new(2.5, 1.0));
    Simulation::enforce_bounds(&world, &mut p);
    assert_eq!(p.velocity.x, -2.5);
    assert_eq!(p.velocity.y, 1.0);
}

#[test]
fn test_particle_may_linger_outside_for_one_tick() {
    // Starts on the wall moving out at 5/tick; after the first tick it is outside and turned around.
    let mut sim = SimulationBuilder::new()
        .with_particle(MAX_X, 0.0, 5.0, 0.0, HealthState::Susceptible)
        .with_still(-150.0, -150.0, infected())
        .build();

    sim.advance();
    let p = sim.particles()[0];
    assert_eq!(p.position.x, MAX_X + 5.0);
    assert_eq!(p.velocity.x, -5.0);

    sim.advance();
    let p = sim.particles()[0];
    assert_eq!(p.position.x, MAX_X);
    assert_eq!(p.velocity.x, -5.0);
    assert!(sim.metrics().reflections() >= 1);
}

#[test]
fn test_bottom_wall_reflects_y_only() {
    let mut sim = SimulationBuilder::new()
        .with_particle(0.0, MIN_Y + 1.0, 1.0, -2.0, HealthState::Susceptible)
        .with_still(150.0, 150.0, infected())
        .build();
    sim.advance();
    let p = sim.particles()[0];
    assert_eq!(p.velocity, Vector2::new(1.0, 2.0));
}

#[test]
fn test_zero_speed_population_never_moves() {
    let mut sim = SimulationBuilder::new()
        .with_seed(8)
        .with_population(25, 0.0, 1, 0)
        .build();
    let start: Vec<_> = sim.particles().iter().map(|p| p.position).collect();
    for _ in 0..20 {
        sim.advance();
    }
    let end: Vec<_> = sim.particles().iter().map(|p| p.position).collect();
    assert_eq!(start, end);
}

#[test]
fn test_zero_contact_radius_disables_transfer() {
    let mut sim = SimulationBuilder::new()
        .with_config(|c| c.disease.contact_radius = 0.0)
        .with_still(0.0, 0.0, infected())
        .with_still(0.0, 0.0, HealthState::Susceptible)
        .build();
    sim.advance();
    assert!(sim.particles()[1].is_susceptible());
}

#[test]
fn test_empty_population_is_complete() {
    let mut sim = Simulation::from_particles(SimulationConfig::default(), Vec::new()).unwrap();
    assert!(sim.is_complete());
    sim.advance();
    assert_eq!(sim.tick(), 1);
    assert_eq!(sim.run_until_complete(5), Some(1));
}

#[test]
fn test_all_but_one_immune() {
    let sim = SimulationBuilder::new()
        .with_seed(4)
        .with_population(10, 1.0, 1, 9)
        .build();
    let census = sim.census();
    assert_eq!(census.immune, 9);
    assert_eq!(census.susceptible, 1);
    assert_eq!(census.infected, 0);
    assert!(sim.is_complete());
}

#[test]
fn test_invalid_world_rejected_at_construction() {
    let mut config = SimulationConfig::with_population(5, 1.0, 1, 0);
    config.world.max_y = config.world.min_y;
    assert!(Simulation::from_config(config).is_err());
}
