//! A hanging rope: an anchored chain of Verlet particles.

use crate::error::RopeError;
use crate::float::Float;
use crate::interaction::DragHandle;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::solver::{ConstraintSolver, RelaxStats};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A rope hanging from a fixed anchor at index 0.
///
/// The particle count is fixed at construction; particles are mutated in
/// place every tick and never added or removed.
#[derive(Clone, Debug)]
pub struct Rope<F: Float = f64> {
    particles: AllocVec<Particle<F>>,
    solver: ConstraintSolver<F>,
    segment_length: F,
}

impl<F: Float> Rope<F> {
    /// Lays the rope out as a straight vertical line hanging down from
    /// `anchor`, with `particle_count - 1` segments of equal length. Only the
    /// anchor is pinned.
    pub fn new(anchor: Vec2<F>, total_length: F, particle_count: usize) -> Result<Self, RopeError> {
        if particle_count < 2 {
            return Err(RopeError::TooFewParticles { count: particle_count });
        }
        if !total_length.is_finite() || total_length <= F::zero() {
            return Err(RopeError::InvalidLength);
        }
        if !anchor.is_finite() {
            return Err(RopeError::NonFiniteAnchor);
        }

        let segment_length = total_length / F::from_usize(particle_count - 1);
        let mut particles = AllocVec::with_capacity(particle_count);
        particles.push(Particle::pinned(anchor));
        for i in 1..particle_count {
            let offset = Vec2::new(F::zero(), segment_length * F::from_usize(i));
            particles.push(Particle::new(anchor + offset));
        }

        log::debug!(
            "rope: {} particles, segment length {} from anchor ({}, {})",
            particle_count, segment_length, anchor.x, anchor.y
        );

        Ok(Rope {
            particles,
            solver: ConstraintSolver::chain(particle_count, segment_length),
            segment_length,
        })
    }

    /// One physics tick: gravity and integration for every particle, then
    /// `iterations` relaxation passes over the chain.
    pub fn update(&mut self, gravity: F, damping: F, iterations: usize) -> RelaxStats {
        self.update_observed(gravity, damping, iterations, &mut NoOpStepObserver)
    }

    /// Same as [`update`](Self::update), reporting each phase to `observer`.
    pub fn update_observed<O: StepObserver>(
        &mut self,
        gravity: F,
        damping: F,
        iterations: usize,
        observer: &mut O,
    ) -> RelaxStats {
        for p in self.particles.iter_mut() {
            p.apply_gravity(gravity);
            p.integrate(damping);
        }
        observer.on_integrate();

        self.solver.relax(&mut self.particles, iterations, observer)
    }

    /// Current positions in chain order. Does not touch simulation state.
    pub fn snapshot(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Pointer override for one particle: sets its position, leaving its
    /// position history alone. Ignores the pinned flag.
    pub fn drag_particle(&mut self, handle: DragHandle, position: Vec2<F>) -> Result<(), RopeError> {
        self.checked_mut(handle.index())?.move_to(position);
        Ok(())
    }

    /// Pin a particle in place, discarding its velocity.
    pub fn pin(&mut self, index: usize) -> Result<(), RopeError> {
        self.checked_mut(index)?.pin();
        Ok(())
    }

    /// Release a pinned particle back to the integrator.
    pub fn unpin(&mut self, index: usize) -> Result<(), RopeError> {
        self.checked_mut(index)?.unpin();
        Ok(())
    }

    /// Largest relative deviation of any segment from `segment_length`.
    pub fn max_stretch(&self) -> F {
        self.solver.max_stretch(&self.particles)
    }

    /// Target distance between adjacent particles.
    pub fn segment_length(&self) -> F {
        self.segment_length
    }

    /// Position of the particle at index 0.
    pub fn anchor(&self) -> Vec2<F> {
        self.particles[0].position
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false; a rope has at least two particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of adjacent pairs, `len() - 1`.
    pub fn segment_count(&self) -> usize {
        self.solver.constraint_count()
    }

    /// Particle at `index`, if in range.
    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    /// Mutable particle at `index`, if in range.
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    /// All particles in chain order.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// All particles, for the boundary clamp.
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    fn checked_mut(&mut self, index: usize) -> Result<&mut Particle<F>, RopeError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(RopeError::ParticleOutOfBounds { index, count })
    }
}
