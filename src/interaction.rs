//! Pointer dragging: picks a particle on press and pins it to the pointer
//! until release.

use crate::float::Float;
use crate::rope::Rope;
use crate::vec::Vec2;

/// Index of the particle currently held by the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragHandle(usize);

impl DragHandle {
    pub fn new(index: usize) -> Self {
        DragHandle(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Tracks at most one dragged particle for the lifetime of a press.
///
/// Any particle within `radius` of the pointer can be grabbed, the pinned
/// anchor included; dragging overrides the pinned flag.
#[derive(Clone, Debug)]
pub struct InteractionController<F: Float> {
    radius: F,
    active: Option<DragHandle>,
}

impl<F: Float> InteractionController<F> {
    pub fn new(radius: F) -> Self {
        InteractionController { radius, active: None }
    }

    pub fn radius(&self) -> F {
        self.radius
    }

    /// First particle in chain order whose centre is within `radius` of `pointer`.
    pub fn pick(&self, pointer: Vec2<F>, rope: &Rope<F>) -> Option<DragHandle> {
        let radius_sq = self.radius * self.radius;
        rope.particles()
            .iter()
            .position(|p| p.position.distance_sq(pointer) <= radius_sq)
            .map(DragHandle)
    }

    /// Starts a drag if the press lands on a particle and returns the new
    /// handle. A press that misses returns `None` and leaves any drag already
    /// held untouched; only [`end_drag`](Self::end_drag) releases it.
    pub fn begin_drag(&mut self, pointer: Vec2<F>, rope: &Rope<F>) -> Option<DragHandle> {
        let picked = self.pick(pointer, rope);
        if let Some(handle) = picked {
            log::debug!("drag begin: particle {} at ({}, {})", handle.index(), pointer.x, pointer.y);
            self.active = Some(handle);
        }
        picked
    }

    /// Moves the held particle onto the pointer. Returns the handle that was
    /// moved, or `None` if nothing is held.
    pub fn drag(&self, rope: &mut Rope<F>, pointer: Vec2<F>) -> Option<DragHandle> {
        let handle = self.active?;
        match rope.drag_particle(handle, pointer) {
            Ok(()) => Some(handle),
            Err(err) => {
                log::warn!("drag ignored: {}", err);
                None
            }
        }
    }

    /// Releases the held particle. Releasing with nothing held is a no-op.
    pub fn end_drag(&mut self) -> Option<DragHandle> {
        let released = self.active.take();
        if let Some(handle) = released {
            log::debug!("drag end: particle {}", handle.index());
        }
        released
    }

    pub fn active(&self) -> Option<DragHandle> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}
