use serde::{Deserialize, Serialize};

use crate::SimError;

/// Tuning constants for the simulation, threaded explicitly into
/// [`Simulation::new`](crate::Simulation::new).
///
/// The world is centered on the origin and spans
/// `[-width/2, width/2] x [-height/2, height/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    /// Chebyshev neighborhood for cohesion and alignment.
    pub visual_range: f32,
    /// Chebyshev neighborhood for separation; obstacles repel within
    /// twice this.
    pub min_distance: f32,
    /// Distance from an edge at which border steering kicks in.
    pub border_margin: f32,
    /// Impulse added per violated edge per tick.
    pub turn_speed: f32,
    pub coherence_factor: f32,
    pub separation_factor: f32,
    pub alignment_factor: f32,
    /// Hard cap on agent speed, enforced after every update.
    pub speed_limit: f32,
    /// RNG seed for the spawner; `None` draws one from the OS. Equal
    /// seeds and equal call sequences give identical trajectories.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            visual_range: 75.0,
            min_distance: 20.0,
            border_margin: 100.0,
            turn_speed: 1.0,
            coherence_factor: 0.005,
            separation_factor: 0.05,
            alignment_factor: 0.05,
            speed_limit: 15.0,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("visual_range", self.visual_range),
            ("min_distance", self.min_distance),
            ("border_margin", self.border_margin),
            ("turn_speed", self.turn_speed),
            ("coherence_factor", self.coherence_factor),
            ("separation_factor", self.separation_factor),
            ("alignment_factor", self.alignment_factor),
            ("speed_limit", self.speed_limit),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "world dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("visual_range", self.visual_range),
            ("min_distance", self.min_distance),
            ("border_margin", self.border_margin),
            ("speed_limit", self.speed_limit),
        ] {
            if value < 0.0 {
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
