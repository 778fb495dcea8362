use serde::{Deserialize, Serialize};

use crate::{Obstacle, SimConfig, SimError, Vector2};

/// Behavioral variant of an agent.
///
/// `Rogue` agents ignore cohesion and alignment entirely; separation,
/// border avoidance, obstacle avoidance and the speed cap still apply,
/// so they weave through the flock without ever joining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    Normal,
    Rogue,
}

/// A single simulated agent.
///
/// Position and velocity are mutated once per tick by the rule
/// pipeline; `radius` and `kind` are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vector2,
    pub velocity: Vector2,
    radius: f32,
    kind: AgentKind,
}

impl Agent {
    pub fn new(
        kind: AgentKind,
        position: Vector2,
        velocity: Vector2,
        radius: f32,
    ) -> Result<Self, SimError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "agent radius must be positive, got {radius}"
            )));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(SimError::InvalidConfiguration(
                "agent position and velocity must be finite".into(),
            ));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            kind,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Steering toward the average position of agents within
    /// `visual_range`. With no neighbors the contribution is exactly
    /// zero; there is no divide.
    pub fn cohesion<'a, I>(&self, others: I, config: &SimConfig) -> Vector2
    where
        I: Iterator<Item = &'a Agent>,
    {
        let mut sum = Vector2::zero();
        let mut count = 0;
        for other in others {
            if self.position.is_close(other.position, config.visual_range) {
                sum += other.position;
                count += 1;
            }
        }
        if count == 0 {
            return Vector2::zero();
        }
        let center = sum / count as f32;
        (center - self.position) * config.coherence_factor
    }

    /// Steering away from every agent within `min_distance`, summed
    /// over all such neighbors (not averaged).
    pub fn separation<'a, I>(&self, others: I, config: &SimConfig) -> Vector2
    where
        I: Iterator<Item = &'a Agent>,
    {
        let mut steering = Vector2::zero();
        for other in others {
            if self.position.is_close(other.position, config.min_distance) {
                steering += (self.position - other.position) * config.separation_factor;
            }
        }
        steering
    }

    /// Steering toward the average velocity of agents within
    /// `visual_range`. With no neighbors the average is taken as the
    /// agent's own velocity, so the contribution is zero.
    pub fn alignment<'a, I>(&self, others: I, config: &SimConfig) -> Vector2
    where
        I: Iterator<Item = &'a Agent>,
    {
        let mut sum = Vector2::zero();
        let mut count = 0;
        for other in others {
            if self.position.is_close(other.position, config.visual_range) {
                sum += other.velocity;
                count += 1;
            }
        }
        if count == 0 {
            return Vector2::zero();
        }
        let average = sum / count as f32;
        (average - self.velocity) * config.alignment_factor
    }

    /// Fixed `turn_speed` impulse away from each world edge closer than
    /// `border_margin`. The four edges are checked independently, so a
    /// corner receives two impulses.
    pub fn border_avoidance(&self, config: &SimConfig) -> Vector2 {
        let half_width = config.width / 2.0;
        let half_height = config.height / 2.0;
        let mut steering = Vector2::zero();
        if self.position.x < -half_width + config.border_margin {
            steering.x += config.turn_speed;
        }
        if self.position.x > half_width - config.border_margin {
            steering.x -= config.turn_speed;
        }
        if self.position.y < -half_height + config.border_margin {
            steering.y += config.turn_speed;
        }
        if self.position.y > half_height - config.border_margin {
            steering.y -= config.turn_speed;
        }
        steering
    }

    /// Separation-style repulsion from every obstacle within
    /// `2 * min_distance`, summed.
    pub fn obstacle_avoidance<'a, I>(&self, obstacles: I, config: &SimConfig) -> Vector2
    where
        I: Iterator<Item = &'a Obstacle>,
    {
        let threshold = 2.0 * config.min_distance;
        let mut steering = Vector2::zero();
        for obstacle in obstacles {
            if self.position.is_close(obstacle.position(), threshold) {
                steering += (self.position - obstacle.position()) * config.separation_factor;
            }
        }
        steering
    }

    /// Cap the speed and advance the position one Euler step.
    pub fn integrate(&mut self, speed_limit: f32) {
        self.velocity = self.velocity.limit(speed_limit);
        self.position += self.velocity;
    }
}
