//! Distance constraint between two chain-adjacent particles.

use crate::float::Float;
use crate::particle::Particle;

/// Result of solving one constraint once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Correction {
    /// At least one endpoint was moved toward the rest length.
    Applied,
    /// Endpoints coincide; the correction direction is undefined, so the pair
    /// is left untouched for this pass.
    Degenerate,
    /// Neither endpoint is free to move.
    BothPinned,
}

/// Keeps particles `a` and `b` at `rest_length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Nudges both endpoints symmetrically toward `rest_length`. Each free
    /// endpoint takes half of the error; a pinned endpoint takes none and its
    /// share is simply dropped for this pass.
    pub fn solve(&self, particles: &mut [Particle<F>]) -> Correction {
        let a_pinned = particles[self.a].pinned;
        let b_pinned = particles[self.b].pinned;
        if a_pinned && b_pinned {
            return Correction::BothPinned;
        }

        let delta = particles[self.b].position - particles[self.a].position;
        let distance = delta.length();
        if distance < F::epsilon() {
            return Correction::Degenerate;
        }

        let error = self.rest_length - distance;
        let correction = delta.scale(error / distance * F::half());

        if !a_pinned {
            particles[self.a].position -= correction;
        }
        if !b_pinned {
            particles[self.b].position += correction;
        }
        Correction::Applied
    }

    /// Signed relative error: positive when stretched, negative when compressed.
    pub fn stretch(&self, particles: &[Particle<F>]) -> F {
        let distance = particles[self.a].position.distance(particles[self.b].position);
        (distance - self.rest_length) / self.rest_length
    }
}
