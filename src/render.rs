//! Draw lists for a renderer: rope segments as lines, particles as circles.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
}

/// One frame's worth of primitives. Lines come first in draw order so the
/// particles sit on top of the segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame<F: Float> {
    pub lines: AllocVec<Line<F>>,
    pub circles: AllocVec<Circle<F>>,
}

impl<F: Float> RenderFrame<F> {
    pub fn from_positions(positions: &[Vec2<F>], radius: F) -> Self {
        let lines = positions
            .windows(2)
            .map(|w| Line { from: w[0], to: w[1] })
            .collect();
        let circles = positions
            .iter()
            .map(|&center| Circle { center, radius })
            .collect();
        RenderFrame { lines, circles }
    }

    /// Positions packed as `[x0, y0, x1, y1, ...]` for FFI hosts.
    pub fn flat_positions(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.circles.len() * 2);
        for c in &self.circles {
            out.push(c.center.x);
            out.push(c.center.y);
        }
        out
    }
}
