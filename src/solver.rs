//! Iterative relaxation over an ordered list of distance constraints.

use crate::constraint::{Correction, DistanceConstraint};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use alloc::vec::Vec as AllocVec;

/// Gauss-Seidel style relaxation: constraints are solved one after another
/// and each sees the corrections of the ones before it. Fixing pair `i` can
/// re-stretch pair `i - 1`, which is why several passes are run. Every pass
/// walks the constraints in the same order so results are reproducible.
#[derive(Clone, Debug)]
pub struct ConstraintSolver<F: Float> {
    constraints: AllocVec<DistanceConstraint<F>>,
}

/// Counters from one call to [`ConstraintSolver::relax`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaxStats {
    pub passes: usize,
    pub applied: usize,
    pub degenerate: usize,
}

impl<F: Float> ConstraintSolver<F> {
    /// Links every particle to its successor: 0-1, 1-2, ... `count - 2`-`count - 1`.
    pub fn chain(count: usize, rest_length: F) -> Self {
        let constraints = (1..count)
            .map(|i| DistanceConstraint::new(i - 1, i, rest_length))
            .collect();
        ConstraintSolver { constraints }
    }

    pub fn constraints(&self) -> &[DistanceConstraint<F>] {
        &self.constraints
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Runs `iterations` front-to-back passes over all constraints.
    pub fn relax<O: StepObserver>(
        &self,
        particles: &mut [Particle<F>],
        iterations: usize,
        observer: &mut O,
    ) -> RelaxStats {
        let mut stats = RelaxStats::default();
        for i in 0..iterations {
            for c in self.constraints.iter() {
                match c.solve(particles) {
                    Correction::Applied => stats.applied += 1,
                    Correction::Degenerate => {
                        stats.degenerate += 1;
                        log::trace!("skipping coincident pair {}-{} on pass {}", c.a, c.b, i);
                    }
                    Correction::BothPinned => {}
                }
            }
            stats.passes += 1;
            observer.on_constraint_iteration(i);
        }
        stats
    }

    /// Largest absolute relative length error over all constraints.
    pub fn max_stretch(&self, particles: &[Particle<F>]) -> F {
        self.constraints
            .iter()
            .map(|c| c.stretch(particles).abs())
            .fold(F::zero(), F::max)
    }
}
