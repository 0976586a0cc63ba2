pub use contagion_core::{
    init_logging, Census, Metrics, ParticleLogic, Simulation, SimulationError,
};
pub mod config {
    pub use contagion_core::config::*;
}
pub mod error {
    pub use contagion_core::error::*;
}
pub mod metrics {
    pub use contagion_core::metrics::*;
}
pub mod particle {
    pub use contagion_core::particle::*;
}
pub mod simulation {
    pub use contagion_core::simulation::*;
}
pub mod snapshot {
    pub use contagion_core::snapshot::*;
}

pub mod state {
    pub use contagion_data::*;
}
