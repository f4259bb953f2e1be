use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use compte_est_bon::pool::constants::HAND_SIZE;
use compte_est_bon::solver::{self, validate_hand};
use compte_est_bon::{Round, TilePool};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Le Compte est Bon - Reach a target with six plaques
#[derive(Parser, Debug)]
#[command(name = "compte-est-bon")]
#[command(about = "Draw six plaques and a target, then find the closest reachable value")]
#[command(version)]
pub struct CliArgs {
    /// Seed for the random source (a fresh one is used when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 1)]
    pub rounds: usize,

    /// Use these six plaques instead of drawing them (comma separated)
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub plaques: Option<Vec<u32>>,

    /// Use this target instead of drawing it
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub seed: Option<u64>,
    pub rounds: usize,
    pub plaques: Option<[u32; HAND_SIZE]>,
    pub target: Option<u32>,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        if args.rounds == 0 {
            bail!("At least one round must be played");
        }

        let plaques = match args.plaques {
            Some(plaques) => {
                validate_hand(&plaques, args.target.unwrap_or(1))
                    .context("Invalid plaques or target")?;
                let hand: [u32; HAND_SIZE] = plaques
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("Expected {} plaques", HAND_SIZE))?;
                Some(hand)
            }
            None => None,
        };

        if args.target == Some(0) {
            bail!("Target must be strictly positive");
        }

        Ok(CliConfig {
            seed: args.seed,
            rounds: args.rounds,
            plaques,
            target: args.target,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Random source for the session, reproducible when a seed is given
fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Draw a round, keeping whatever the user fixed on the command line
fn next_round(config: &CliConfig, pool: &TilePool, rng: &mut StdRng) -> Round {
    let drawn = pool.draw_round(rng);
    Round {
        hand: config.plaques.unwrap_or(drawn.hand),
        target: config.target.unwrap_or(drawn.target),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let mut rng = session_rng(config.seed);
    let pool = TilePool::new(&mut rng);
    debug!("Session pool: {:?}", pool.plaques());

    for number in 1..=config.rounds {
        let round = next_round(&config, &pool, &mut rng);
        info!("Round {}: {:?}", number, round);

        if config.rounds > 1 {
            println!("Round {}", number);
        }
        println!("{}", round);

        let started = Instant::now();
        let solution = solver::spawn(round.hand.to_vec(), round.target)
            .wait()
            .context("Solver failed")?;
        let elapsed = started.elapsed();

        println!();
        println!("{}", solution);
        println!("({:.2?})", elapsed);
        if number < config.rounds {
            println!();
        }
    }

    Ok(())
}
