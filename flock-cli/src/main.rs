use anyhow::{Context, Result};
use clap::Parser;
use flock_core::{AgentKind, SimConfig, Simulation};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless flocking simulation runner", long_about = None)]
struct Args {
    /// Number of normal agents
    #[arg(short = 'n', long, default_value_t = 20)]
    agents: u32,

    /// Number of rogue agents
    #[arg(short, long, default_value_t = 2)]
    rogues: u32,

    /// Number of randomly placed obstacles
    #[arg(short, long, default_value_t = 1)]
    obstacles: u32,

    /// Agent radius
    #[arg(long, default_value_t = 10.0)]
    agent_radius: f32,

    /// Obstacle radius
    #[arg(long, default_value_t = 15.0)]
    obstacle_radius: f32,

    /// Ticks to simulate
    #[arg(short, long, default_value_t = 300)]
    ticks: u64,

    /// World width
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// World height
    #[arg(long, default_value_t = 480.0)]
    height: f32,

    /// RNG seed; equal seeds replay identical runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit a JSON snapshot every tick instead of only the final one
    #[arg(long)]
    trace: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<()> {
    let config = SimConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
        ..SimConfig::default()
    };
    let mut sim = Simulation::new(config).context("invalid simulation configuration")?;

    for _ in 0..args.agents {
        sim.add_agent(AgentKind::Normal, args.agent_radius)
            .context("failed to spawn agent")?;
    }
    for _ in 0..args.rogues {
        sim.add_agent(AgentKind::Rogue, args.agent_radius)
            .context("failed to spawn rogue")?;
    }
    for _ in 0..args.obstacles {
        sim.add_random_obstacle(args.obstacle_radius)
            .context("failed to place obstacle")?;
    }

    log::info!(
        "Running {} agents ({} rogue), {} obstacles for {} ticks in a {}x{} world",
        args.agents + args.rogues,
        args.rogues,
        args.obstacles,
        args.ticks,
        args.width,
        args.height
    );

    for _ in 0..args.ticks {
        sim.step();
        if args.trace {
            println!("{}", serde_json::to_string(&sim.snapshot())?);
        } else if let Some(agent) = sim.agents().first() {
            log::debug!(
                "tick {}: agent0 at ({:.1}, {:.1}) speed {:.2}",
                sim.tick(),
                agent.position.x,
                agent.position.y,
                agent.velocity.magnitude()
            );
        }
    }

    if !args.trace {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    }

    let mean_speed: f32 = sim
        .agents()
        .iter()
        .map(|agent| agent.velocity.magnitude())
        .sum::<f32>()
        / sim.agents().len().max(1) as f32;
    log::info!(
        "Finished at tick {} with mean speed {:.2}",
        sim.tick(),
        mean_speed
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    run(&args)
}
