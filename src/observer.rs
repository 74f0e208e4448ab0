//! Step observer trait for monitoring simulation ticks.

/// Hooks called at each phase of a tick, in order. All methods default to
/// no-ops. Useful for debugging, visualization or profiling.
pub trait StepObserver {
    /// Called after the pointer override moved the dragged particle.
    fn on_drag_override(&mut self, _index: usize) {}

    /// Called after every particle has had gravity applied and been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after the boundary clamp.
    fn on_clamp(&mut self) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards tick phases to the `log` facade at `trace` level and counts ticks.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    ticks: u64,
    passes: usize,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl StepObserver for LogStepObserver {
    fn on_drag_override(&mut self, index: usize) {
        log::trace!("tick {}: particle {} follows pointer", self.ticks, index);
    }

    fn on_integrate(&mut self) {
        self.passes = 0;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.passes += 1;
    }

    fn on_step_complete(&mut self) {
        log::trace!("tick {} complete after {} relaxation passes", self.ticks, self.passes);
        self.ticks += 1;
    }
}
