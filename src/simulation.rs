//! The simulation context: one rope, its area, and the pointer state.

use crate::bounds::SimulationArea;
use crate::config::SimulationConfig;
use crate::error::RopeError;
use crate::float::Float;
use crate::interaction::{DragHandle, InteractionController};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::render::RenderFrame;
use crate::rope::Rope;
use crate::solver::RelaxStats;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns everything a host loop needs between frames. The host forwards
/// pointer events, calls [`tick`](Self::tick) once per frame and draws
/// [`render_frame`](Self::render_frame).
#[derive(Clone, Debug)]
pub struct Simulation<F: Float = f64> {
    rope: Rope<F>,
    area: SimulationArea<F>,
    interaction: InteractionController<F>,
    pointer: Vec2<F>,
    gravity: F,
    damping: F,
    iterations: usize,
    ticks: u64,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: SimulationConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;
        let area = SimulationArea::new(config.width, config.height, config.particle_radius)?;
        let rope = Rope::new(config.anchor, config.rope_length, config.particle_count)?;
        log::debug!(
            "simulation: {}x{} area, gravity {}, damping {}, {} passes",
            config.width, config.height, config.gravity, config.damping, config.iterations
        );
        Ok(Simulation {
            rope,
            area,
            interaction: InteractionController::new(config.particle_radius),
            pointer: config.anchor,
            gravity: config.gravity,
            damping: config.damping,
            iterations: config.iterations,
            ticks: 0,
        })
    }

    /// Pointer went down at `position`. Returns the grabbed particle, if any.
    pub fn pointer_pressed(&mut self, position: Vec2<F>) -> Option<DragHandle> {
        self.pointer = position;
        self.interaction.begin_drag(position, &self.rope)
    }

    /// Pointer moved. The held particle follows on the next tick.
    pub fn pointer_moved(&mut self, position: Vec2<F>) {
        self.pointer = position;
    }

    pub fn pointer_released(&mut self) -> Option<DragHandle> {
        self.interaction.end_drag()
    }

    pub fn tick(&mut self) -> RelaxStats {
        self.tick_observed(&mut NoOpStepObserver)
    }

    /// Drag override, gravity and integration, relaxation, then the clamp.
    pub fn tick_observed<O: StepObserver>(&mut self, observer: &mut O) -> RelaxStats {
        if let Some(handle) = self.interaction.drag(&mut self.rope, self.pointer) {
            observer.on_drag_override(handle.index());
        }

        let stats = self
            .rope
            .update_observed(self.gravity, self.damping, self.iterations, observer);

        self.area.apply(self.rope.particles_mut());
        observer.on_clamp();

        self.ticks += 1;
        observer.on_step_complete();
        stats
    }

    pub fn snapshot(&self) -> AllocVec<Vec2<F>> {
        self.rope.snapshot()
    }

    pub fn render_frame(&self) -> RenderFrame<F> {
        RenderFrame::from_positions(&self.rope.snapshot(), self.area.particle_radius())
    }

    pub fn rope(&self) -> &Rope<F> {
        &self.rope
    }

    pub fn rope_mut(&mut self) -> &mut Rope<F> {
        &mut self.rope
    }

    pub fn area(&self) -> &SimulationArea<F> {
        &self.area
    }

    pub fn dragging(&self) -> Option<DragHandle> {
        self.interaction.active()
    }

    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
