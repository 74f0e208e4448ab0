//! Error types for rope and simulation construction.

use core::fmt;

/// Invalid configuration, reported at construction time. Nothing fails
/// once a rope or simulation exists.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// A rope needs at least two particles to have a segment.
    TooFewParticles { count: usize },
    /// Total rope length must be positive and finite.
    InvalidLength,
    /// Anchor coordinates must be finite.
    NonFiniteAnchor,
    /// Simulation area must be positive and leave room for a particle.
    InvalidArea,
    /// Gravity must be finite.
    InvalidGravity,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::TooFewParticles { count } => {
                write!(f, "invalid configuration: rope needs at least 2 particles, got {}", count)
            }
            RopeError::InvalidLength => {
                write!(f, "invalid configuration: rope length must be positive and finite")
            }
            RopeError::NonFiniteAnchor => write!(f, "invalid configuration: anchor must be finite"),
            RopeError::InvalidArea => write!(
                f,
                "invalid configuration: area must be positive and at least one particle diameter wide"
            ),
            RopeError::InvalidGravity => write!(f, "invalid configuration: gravity must be finite"),
            RopeError::InvalidDamping => write!(f, "invalid configuration: damping must be in [0, 1]"),
            RopeError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for RopeError {}
