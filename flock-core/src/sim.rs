use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{spawn, Agent, AgentKind, Obstacle, SimConfig, SimError, Vector2};

/// Read-only view of one agent for the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Vector2,
    pub radius: f32,
    pub kind: AgentKind,
}

/// Read-only view of one obstacle for the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleState {
    pub position: Vector2,
    pub radius: f32,
}

/// Immutable per-frame view of the whole world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub agents: Vec<AgentState>,
    pub obstacles: Vec<ObstacleState>,
}

/// The world: agents, obstacles, and the tick counter.
///
/// `Simulation` exclusively owns its agents and obstacles; hosts read
/// the world through [`Snapshot`]s or the borrow accessors and advance
/// it with [`step`](Simulation::step).
pub struct Simulation {
    config: SimConfig,
    agents: Vec<Agent>,
    obstacles: Vec<Obstacle>,
    tick: u64,
    rng: SmallRng,
}

/// Everyone in `agents` except the acting agent at `skip`.
fn peers(agents: &[Agent], skip: usize) -> impl Iterator<Item = &Agent> {
    agents
        .iter()
        .enumerate()
        .filter(move |(i, _)| *i != skip)
        .map(|(_, agent)| agent)
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen(),
        };
        Ok(Self {
            config,
            agents: Vec::new(),
            obstacles: Vec::new(),
            tick: 0,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Spawn one agent with randomized initial state. Append-only;
    /// insertion order is the update order.
    pub fn add_agent(&mut self, kind: AgentKind, radius: f32) -> Result<(), SimError> {
        let agent = spawn::random_agent(&mut self.rng, kind, radius)?;
        self.agents.push(agent);
        Ok(())
    }

    /// Append an agent with explicit initial state.
    pub fn insert_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    pub fn add_obstacle(&mut self, position: Vector2, radius: f32) -> Result<(), SimError> {
        self.obstacles.push(Obstacle::new(position, radius)?);
        Ok(())
    }

    /// Place an obstacle at a random position inside the world.
    pub fn add_random_obstacle(&mut self, radius: f32) -> Result<(), SimError> {
        let obstacle = spawn::random_obstacle(&mut self.rng, &self.config, radius)?;
        self.obstacles.push(obstacle);
        Ok(())
    }

    /// Advance the world by one tick.
    ///
    /// Agents update sequentially in insertion order and each one is
    /// committed before the next one's rules run, so later agents see
    /// earlier agents' same-tick updates. Within one agent, each rule
    /// reads the velocity as already modified by the rules before it.
    pub fn step(&mut self) {
        for i in 0..self.agents.len() {
            let mut agent = self.agents[i].clone();
            let config = &self.config;

            if agent.kind() == AgentKind::Normal {
                agent.velocity += agent.cohesion(peers(&self.agents, i), config);
            }
            agent.velocity += agent.separation(peers(&self.agents, i), config);
            if agent.kind() == AgentKind::Normal {
                agent.velocity += agent.alignment(peers(&self.agents, i), config);
            }
            agent.velocity += agent.border_avoidance(config);
            agent.velocity += agent.obstacle_avoidance(self.obstacles.iter(), config);
            agent.integrate(config.speed_limit);

            self.agents[i] = agent;
        }
        self.tick += 1;
    }

    /// Owned, read-only view of the world for the rendering host.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            agents: self
                .agents
                .iter()
                .map(|agent| AgentState {
                    position: agent.position,
                    radius: agent.radius(),
                    kind: agent.kind(),
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|obstacle| ObstacleState {
                    position: obstacle.position(),
                    radius: obstacle.radius(),
                })
                .collect(),
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
