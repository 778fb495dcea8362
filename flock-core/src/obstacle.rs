use crate::{SimError, Vector2};

/// A static circular region agents steer away from. Created once at
/// setup and never moved or removed during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    position: Vector2,
    radius: f32,
}

impl Obstacle {
    pub fn new(position: Vector2, radius: f32) -> Result<Self, SimError> {
        if !position.is_finite() {
            return Err(SimError::InvalidConfiguration(format!(
                "obstacle position must be finite, got ({}, {})",
                position.x, position.y
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "obstacle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { position, radius })
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_validates_inputs() {
        assert!(Obstacle::new(Vector2::new(10.0, 0.0), 5.0).is_ok());
        assert!(Obstacle::new(Vector2::new(0.0, 0.0), 0.0).is_err());
        assert!(Obstacle::new(Vector2::new(0.0, 0.0), -3.0).is_err());
        assert!(Obstacle::new(Vector2::new(f32::NAN, 0.0), 5.0).is_err());
        assert!(Obstacle::new(Vector2::new(0.0, 0.0), f32::INFINITY).is_err());
    }
}
