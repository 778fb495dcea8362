//! Flocking simulation core.
//!
//! Agents ("boids") share a bounded 2D plane and steer by local rules:
//! cohesion, separation, alignment, border avoidance and obstacle
//! avoidance, followed by a hard speed cap and an Euler integration
//! step. [`Simulation`] owns the world and advances it one tick at a
//! time; rendering and input belong to the host, which only ever sees
//! read-only [`Snapshot`]s.

mod agent;
mod config;
mod error;
mod obstacle;
mod sim;
pub mod spawn;
mod vector;

pub use agent::{Agent, AgentKind};
pub use config::SimConfig;
pub use error::SimError;
pub use obstacle::Obstacle;
pub use sim::{AgentState, ObstacleState, Simulation, Snapshot};
pub use vector::Vector2;
