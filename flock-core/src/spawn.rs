//! Random agent and obstacle factory.
//!
//! All functions draw from a caller-owned rng, so a simulation seeded
//! with a fixed value replays the exact same spawn sequence.

use rand::Rng;
use std::f32::consts::TAU;

use crate::{Agent, AgentKind, Obstacle, SimConfig, SimError, Vector2};

/// Half-extent of the square Normal agents spawn in.
const SPAWN_EXTENT: f32 = 100.0;
/// Rogues spawn off to the side of the flock.
const ROGUE_X_RANGE: std::ops::Range<f32> = 200.0..300.0;
/// Fixed rogue launch speed; only the heading is random.
const ROGUE_SPEED: f32 = 30.0;

/// Construct an agent with the randomized initial state for its kind.
///
/// Normal agents start inside `[-100, 100]^2` drifting down-left;
/// rogues start in the `x in [200, 300]` band on a uniformly random
/// heading at speed 30.
pub fn random_agent<R: Rng>(
    rng: &mut R,
    kind: AgentKind,
    radius: f32,
) -> Result<Agent, SimError> {
    let (position, velocity) = match kind {
        AgentKind::Normal => (
            Vector2::new(
                rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
                rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            ),
            Vector2::new(rng.gen_range(-20.0..-10.0), rng.gen_range(-20.0..-10.0)),
        ),
        AgentKind::Rogue => {
            let position = Vector2::new(
                rng.gen_range(ROGUE_X_RANGE),
                rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            );
            let heading = rng.gen_range(0.0..TAU);
            (position, Vector2::from_angle(heading) * ROGUE_SPEED)
        }
    };
    Agent::new(kind, position, velocity, radius)
}

/// Construct an obstacle at a uniformly random position inside the
/// world rectangle.
pub fn random_obstacle<R: Rng>(
    rng: &mut R,
    config: &SimConfig,
    radius: f32,
) -> Result<Obstacle, SimError> {
    let half_width = config.width / 2.0;
    let half_height = config.height / 2.0;
    let position = Vector2::new(
        rng.gen_range(-half_width..half_width),
        rng.gen_range(-half_height..half_height),
    );
    Obstacle::new(position, radius)
}
