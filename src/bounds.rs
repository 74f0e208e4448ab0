//! Rectangular simulation area and the boundary clamp.

use crate::error::RopeError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// The finite region particles live in. A particle of `particle_radius` stays
/// fully visible, so centres are clamped into
/// `[radius, width - radius] x [radius, height - radius]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationArea<F: Float> {
    width: F,
    height: F,
    particle_radius: F,
}

impl<F: Float> SimulationArea<F> {
    pub fn new(width: F, height: F, particle_radius: F) -> Result<Self, RopeError> {
        let two = F::one() + F::one();
        let finite = width.is_finite() && height.is_finite() && particle_radius.is_finite();
        if !finite
            || width <= F::zero()
            || height <= F::zero()
            || particle_radius < F::zero()
            || particle_radius * two > width
            || particle_radius * two > height
        {
            return Err(RopeError::InvalidArea);
        }
        Ok(SimulationArea { width, height, particle_radius })
    }

    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }
    pub fn particle_radius(&self) -> F { self.particle_radius }

    /// Top-left corner of the allowed region.
    pub fn min(&self) -> Vec2<F> {
        Vec2::new(self.particle_radius, self.particle_radius)
    }

    /// Bottom-right corner of the allowed region.
    pub fn max(&self) -> Vec2<F> {
        Vec2::new(self.width - self.particle_radius, self.height - self.particle_radius)
    }

    pub fn clamp(&self, position: Vec2<F>) -> Vec2<F> {
        position.clamp(self.min(), self.max())
    }

    pub fn contains(&self, position: Vec2<F>) -> bool {
        let (min, max) = (self.min(), self.max());
        position.x >= min.x && position.x <= max.x && position.y >= min.y && position.y <= max.y
    }

    /// Clamps every particle, pinned ones included. `previous_position` is
    /// untouched, so a particle pushed against a wall keeps its implicit velocity.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        for p in particles.iter_mut() {
            p.position = self.clamp(p.position);
        }
    }
}
