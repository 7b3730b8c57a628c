use city_pursuit::core::config::SimulationConfig;
use city_pursuit::core::error::{Result, SimError};
use city_pursuit::render::TerminalSession;
use city_pursuit::simulation::tick::{run_simulation_tick, TickOutcome};
use city_pursuit::simulation::world::World;
use city_pursuit::world::loader;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Grid-bound predator/prey street simulation
#[derive(Parser, Debug)]
#[command(name = "city-pursuit", version)]
struct Args {
    /// Tab-delimited street map file
    map: PathBuf,

    /// RNG seed; the same seed replays the same run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// TOML config file overriding the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the initial prey population
    #[arg(long)]
    prey: Option<usize>,

    /// Override the initial pursuer population
    #[arg(long)]
    pursuers: Option<usize>,

    /// Run without the terminal UI, logging progress to stderr
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks instead of running to extinction
    #[arg(long)]
    ticks: Option<u64>,

    /// Milliseconds between frames in interactive mode
    #[arg(long)]
    tick_delay_ms: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_toml_file(path)?,
        None => SimulationConfig::new(),
    };
    if let Some(count) = args.prey {
        config.prey_count = count;
    }
    if let Some(count) = args.pursuers {
        config.pursuer_count = count;
    }
    if let Some(delay) = args.tick_delay_ms {
        config.tick_delay_ms = delay;
    }
    config.validate().map_err(SimError::Config)?;

    let grid = loader::load_map_file(&args.map, config.street_width)?;
    let mut world = World::new(grid, &config, args.seed)?;

    if args.headless {
        run_headless(&mut world, &config, args.ticks)
    } else {
        run_interactive(&mut world, &config, args.ticks)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("city_pursuit=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_headless(world: &mut World, config: &SimulationConfig, ticks: Option<u64>) -> Result<()> {
    loop {
        let report = run_simulation_tick(world, config)?;
        if report.outcome == TickOutcome::PreyExtinct {
            info!(
                tick = report.tick,
                pursuers = report.pursuer_count,
                "prey extinct, stopping"
            );
            return Ok(());
        }
        if ticks.is_some_and(|limit| report.tick >= limit) {
            info!(
                tick = report.tick,
                prey = report.prey_remaining,
                pursuers = report.pursuer_count,
                "tick limit reached"
            );
            return Ok(());
        }
    }
}

fn run_interactive(world: &mut World, config: &SimulationConfig, ticks: Option<u64>) -> Result<()> {
    let mut session = TerminalSession::new()?;
    let frame_delay = Duration::from_millis(config.tick_delay_ms);

    loop {
        let report = run_simulation_tick(world, config)?;
        session.draw_frame(world, &report)?;
        // An extinct world stays on screen until the user quits; ticking
        // it again is a no-op.
        if session.poll_quit(frame_delay)? {
            return Ok(());
        }
        if report.outcome == TickOutcome::Running && ticks.is_some_and(|limit| report.tick >= limit)
        {
            return Ok(());
        }
    }
}
