//! Contagion spreading through a population of moving particles.
//!
//! The engine lives in `contagion_core`; this crate re-exports it under
//! [`model`] and ships a headless driver binary.

pub mod model;
