//! Configuration for a rope simulation.

use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec2;

/// Everything needed to build a [`Simulation`](crate::Simulation).
///
/// Defaults reproduce the classic demo: an 800x600 area with a 300-unit,
/// 20-particle rope hanging from (400, 50).
///
/// # Builder Pattern
/// ```
/// use dangle::config::SimulationConfig;
/// use dangle::vec::Vec2;
///
/// let config: SimulationConfig<f64> = SimulationConfig::new()
///     .with_particle_count(30)
///     .with_iterations(8)
///     .with_gravity(0.4)
///     .with_anchor(Vec2::new(200.0, 40.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    pub width: F,
    pub height: F,
    /// Pick radius for dragging and margin for the boundary clamp. Default: 5.
    pub particle_radius: F,
    pub particle_count: usize,
    /// Total rest length of the rope. Default: 300.
    pub rope_length: F,
    pub anchor: Vec2<F>,
    /// Added to every free particle's `y` once per tick. Default: 0.5.
    pub gravity: F,
    /// Multiplies implicit velocity each tick, in [0, 1]. Default: 0.99.
    pub damping: F,
    /// Constraint relaxation passes per tick. Default: 5.
    pub iterations: usize,
}

impl<F: Float> SimulationConfig<F> {
    pub fn new() -> Self {
        let width = F::from_f32(800.0);
        SimulationConfig {
            width,
            height: F::from_f32(600.0),
            particle_radius: F::from_f32(5.0),
            particle_count: 20,
            rope_length: F::from_f32(300.0),
            anchor: Vec2::new(width * F::half(), F::from_f32(50.0)),
            gravity: F::from_f32(0.5),
            damping: F::from_f32(0.99),
            iterations: 5,
        }
    }

    /// Resizes the area. The anchor is left where it is.
    pub fn with_area(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the pick radius and clamp margin.
    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Set the number of particles, anchor included.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the total rest length of the rope.
    pub fn with_rope_length(mut self, length: F) -> Self {
        self.rope_length = length;
        self
    }

    /// Set where the rope hangs from.
    pub fn with_anchor(mut self, anchor: Vec2<F>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the per-tick gravity step along `y`.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the velocity damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of relaxation passes per tick.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Checks the tick parameters. Rope and area parameters are validated
    /// by [`Rope::new`](crate::Rope::new) and
    /// [`SimulationArea::new`](crate::SimulationArea::new).
    pub fn validate(&self) -> Result<(), RopeError> {
        if !self.gravity.is_finite() {
            return Err(RopeError::InvalidGravity);
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return Err(RopeError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
