//! Verlet particles: point masses with position history.

use crate::float::Float;
use crate::vec::Vec2;

/// A rope particle. Velocity is implicit in `position - previous_position`,
/// so anything that moves `position` directly (gravity, constraint
/// correction) is carried into the next tick's velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub previous_position: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest.
    pub fn new(position: Vec2<F>) -> Self {
        Particle {
            position,
            previous_position: position,
            pinned: false,
        }
    }

    /// A particle excluded from gravity, integration and constraint correction.
    pub fn pinned(position: Vec2<F>) -> Self {
        Particle {
            position,
            previous_position: position,
            pinned: true,
        }
    }

    /// Gravity acts on `y` only.
    pub fn apply_gravity(&mut self, g: F) {
        if self.pinned {
            return;
        }
        self.position.y = self.position.y + g;
    }

    pub fn integrate(&mut self, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.position - self.previous_position).scale(damping);
        self.previous_position = self.position;
        self.position += velocity;
    }

    /// Displacement over the last tick.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.previous_position
    }

    /// Pinning also discards any implicit velocity.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.previous_position = self.position;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Pointer override: moves `position` regardless of `pinned` and leaves
    /// `previous_position` alone, so the jump shows up as velocity next tick.
    pub fn move_to(&mut self, position: Vec2<F>) {
        self.position = position;
    }
}
