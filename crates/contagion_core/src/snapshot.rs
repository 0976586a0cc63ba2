//! Read-only frames for renderers and exporters.
//!
//! A snapshot copies what a display layer needs out of a [`Simulation`] so it
//! can be drawn or serialized without borrowing the engine.
//!
//! [`Simulation`]: crate::Simulation

use crate::metrics::Census;
use contagion_data::Color;
use serde::{Deserialize, Serialize};

/// What a renderer needs to draw one particle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ParticleSnapshot {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    /// Display colour as 8-bit RGB.
    pub rgb: (u8, u8, u8),
}

/// Read-only view of a whole simulation at one tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationSnapshot {
    pub tick: u64,
    pub complete: bool,
    pub census: Census,
    pub particles: Vec<ParticleSnapshot>,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
