//! Confetti Particles - particle store, spawn policy, and simulation
//!
//! Provides the animated half of the confetti field:
//! - Fixed-field `Particle` records reset from a shared palette
//! - `ParticleStore` with order-preserving removal during iteration
//! - Spawn-count resolution for `start(min, max)` style calls
//! - Per-frame physics: collective sway, fall, tilt, recycle-vs-remove

mod particle;
mod rand;
mod sim;
mod store;

pub use particle::Particle;
pub use rand::ConfettiRng;
pub use sim::{Simulation, StepParams};
pub use store::ParticleStore;
