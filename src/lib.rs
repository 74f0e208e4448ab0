//! Interactive hanging-rope simulation with Verlet integration.
//!
//! `dangle` models a rope as a chain of point masses joined by fixed-length
//! segments. Each tick applies gravity, integrates with implicit velocity, and
//! relaxes segment lengths over a few ordered passes. A pointer can grab any
//! particle and drag it around. Windowing, input polling and drawing are left
//! to the host; the crate hands back positions and draw lists.
//!
//! # Features
//!
//! - **Verlet integration**: velocity is implied by position history
//! - **Iterative relaxation**: front-to-back distance constraint passes
//! - **Dragging**: pick the first particle under the pointer and pin it there
//! - **Boundary clamp**: keep particles inside a finite area
//! - **Observable**: monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use dangle::{Simulation, SimulationConfig, Vec2};
//!
//! let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
//! sim.tick();
//! assert_eq!(sim.snapshot()[0], Vec2::new(400.0, 50.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod rope;
pub mod interaction;
pub mod bounds;
pub mod render;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{Correction, DistanceConstraint};
pub use solver::{ConstraintSolver, RelaxStats};
pub use rope::Rope;
pub use interaction::{DragHandle, InteractionController};
pub use bounds::SimulationArea;
pub use render::{Circle, Line, RenderFrame};
pub use simulation::Simulation;
pub use config::SimulationConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::RopeError;
