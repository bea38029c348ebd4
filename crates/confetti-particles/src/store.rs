//! Ordered, growable particle collection

use crate::particle::Particle;

/// The particle store: an ordered, mutable collection of flakes.
///
/// Removal uses `Vec::remove` rather than swap-remove so the remaining
/// particles keep their order and an in-progress sweep can continue at the
/// same index without skipping or revisiting anything.
#[derive(Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Remove the particle at `index`, shifting later particles down.
    pub fn remove(&mut self, index: usize) -> Particle {
        self.particles.remove(index)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }
}
