use dangle::{Simulation, SimulationConfig, Vec2};
use wasm_bindgen::prelude::*;

// ---- Rope Demo ----

/// Browser-facing wrapper. The page owns the canvas, the animation frame
/// loop and the mouse listeners; it forwards events here and draws
/// `positions()` as connected circles.
#[wasm_bindgen]
pub struct RopeDemo {
    sim: Simulation<f64>,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, particles: usize) -> Result<RopeDemo, JsValue> {
        let config = SimulationConfig::new()
            .with_area(width, height)
            .with_anchor(Vec2::new(width * 0.5, 50.0))
            .with_particle_count(particles);
        let sim = Simulation::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(RopeDemo { sim })
    }

    /// Advance one frame. The page paces calls at its own frame rate.
    pub fn update(&mut self) {
        self.sim.tick();
    }

    /// Returns true if the press grabbed a particle.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.sim.pointer_pressed(Vec2::new(x, y)).is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sim.pointer_moved(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        if let Some(handle) = self.sim.pointer_released() {
            log::debug!("released particle {}", handle.index());
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f64> {
        self.sim.render_frame().flat_positions()
    }

    pub fn particle_radius(&self) -> f64 {
        self.sim.area().particle_radius()
    }

    pub fn particle_count(&self) -> usize {
        self.sim.rope().len()
    }

    /// Largest relative segment stretch, for an on-screen readout.
    pub fn max_stretch(&self) -> f64 {
        self.sim.rope().max_stretch()
    }
}
