use serde::{Deserialize, Serialize};

/// A 2D vector used for both position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale to exactly `max` magnitude when faster than `max`,
    /// preserving direction. A zero-magnitude vector is returned
    /// unchanged rather than divided.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max && mag > 0.0 {
            Self {
                x: self.x / mag * max,
                y: self.y / mag * max,
            }
        } else {
            *self
        }
    }

    /// Square (Chebyshev) neighborhood test: both axis offsets strictly
    /// under `threshold`. Cheaper than a Euclidean check and used by
    /// every steering rule, each with its own threshold.
    pub fn is_close(&self, other: Vector2, threshold: f32) -> bool {
        (self.x - other.x).abs() < threshold && (self.y - other.y).abs() < threshold
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::ops::Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn limit_rescales_to_exact_magnitude() {
        let v = Vector2::new(-6.0, -8.0).limit(5.0);
        assert_eq!(v, Vector2::new(-3.0, -4.0));
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn limit_leaves_slow_vectors_alone() {
        let v = Vector2::new(1.0, -1.0);
        assert_eq!(v.limit(10.0), v);
    }

    #[test]
    fn limit_of_zero_vector_is_zero() {
        let v = Vector2::zero().limit(0.0);
        assert_eq!(v, Vector2::zero());
        assert!(v.x.is_finite() && v.y.is_finite());
    }

    #[test]
    fn is_close_is_a_square_test() {
        let origin = Vector2::zero();
        assert!(origin.is_close(Vector2::new(15.0, 0.0), 20.0));
        // Euclidean distance here is ~21.2, but each axis is under the
        // threshold, so the square test accepts it.
        assert!(origin.is_close(Vector2::new(15.0, 15.0), 20.0));
        assert!(!origin.is_close(Vector2::new(15.0, 25.0), 20.0));
        assert!(!origin.is_close(Vector2::new(20.0, 0.0), 20.0));
    }

    #[test]
    fn from_angle_is_a_unit_vector() {
        let v = Vector2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!((v.magnitude() - 1.0).abs() < 1e-6);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(b - a, Vector2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.0));
        let mut c = a;
        c += b;
        assert_eq!(c, Vector2::new(4.0, 6.0));
    }
}
