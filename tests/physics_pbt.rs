use contagion_lib::model::config::{SimulationConfig, WorldConfig, MAX_X, MAX_Y, MIN_Y};
use contagion_lib::model::state::{HealthState, Particle, Vector2};
use contagion_lib::model::{ParticleLogic, Simulation};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_point()(
        x in -1.0e6f64..1.0e6,
        y in -1.0e6f64..1.0e6
    ) -> Vector2 {
        Vector2::new(x, y)
    }
}

fn arb_health() -> impl Strategy<Value = HealthState> {
    prop_oneof![
        Just(HealthState::Susceptible),
        (1i32..=90).prop_map(|sickness| HealthState::Infected { sickness }),
        Just(HealthState::Immune),
    ]
}

fn severity(state: HealthState) -> u8 {
    match state {
        HealthState::Susceptible => 0,
        HealthState::Infected { .. } => 1,
        HealthState::Immune => 2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_distance_symmetric_and_zero_on_self(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(a.distance(a), 0.0);
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert!(a.distance(b) >= 0.0);
    }

    #[test]
    fn test_health_only_moves_forward(
        start in arb_health(),
        other in arb_health(),
        steps in proptest::collection::vec(any::<bool>(), 1..200)
    ) {
        let mut p = Particle::new(Vector2::ZERO, Vector2::ZERO).with_health(start);
        let mut partner = Particle::new(Vector2::ZERO, Vector2::ZERO).with_health(other);
        for contact in steps {
            let before = p.health;
            if contact {
                p.resolve_contact(&mut partner);
            } else {
                p.tick(90);
                if let (HealthState::Infected { sickness: old }, HealthState::Infected { sickness: new }) = (before, p.health) {
                    prop_assert_eq!(new, old + 1);
                }
            }
            prop_assert!(severity(p.health) >= severity(before));
            if before.is_immune() {
                prop_assert!(p.health.is_immune());
            }
        }
    }

    #[test]
    fn test_reflection_past_max_x(
        overshoot in 1.0e-9f64..100.0,
        y in MIN_Y..MAX_Y,
        vx in 0.01f64..10.0,
        vy in -10.0f64..10.0
    ) {
        let world = WorldConfig::default();
        let mut p = Particle::new(Vector2::new(MAX_X + overshoot, y), Vector2::new(vx, vy));
        Simulation::enforce_bounds(&world, &mut p);
        prop_assert_eq!(p.velocity.x, -vx);
        prop_assert_eq!(p.velocity.y, vy);
    }

    #[test]
    fn test_initial_assignment_order(
        seed in any::<u64>(),
        cells in 2usize..60,
        infection_frac in 0.0f64..1.0,
        immune_frac in 0.0f64..1.0
    ) {
        let infections = 1 + ((cells - 1) as f64 * infection_frac) as i64;
        let infections = infections.min(cells as i64 - 1);
        let immune = ((cells as f64) * immune_frac) as i64;
        let immune = immune.min(cells as i64 - 1);

        let config = SimulationConfig::with_population(cells, 1.0, infections, immune);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sim = Simulation::with_rng(config, &mut rng).unwrap();

        prop_assert_eq!(sim.population(), cells);
        for (i, p) in sim.particles().iter().enumerate() {
            let i = i as i64;
            let expected = if i < immune {
                HealthState::Immune
            } else if i < infections {
                HealthState::FRESH_INFECTION
            } else {
                HealthState::Susceptible
            };
            prop_assert_eq!(p.health, expected);
        }
    }
}
