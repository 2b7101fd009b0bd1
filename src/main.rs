//! Command line entry point for ladder-league
//!
//! Loads configuration, sets up logging and drives a session either from
//! the demo ladder or from an event script.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ladder_league::config::AppConfig;
use ladder_league::render;
use ladder_league::script::{ReplayReport, Script};
use ladder_league::utils::{SequentialIdGenerator, SystemClock};
use ladder_league::{EloCalculator, Session};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Ladder League - Elo ladder and football league table
#[derive(Parser)]
#[command(
    name = "ladder-league",
    version,
    about = "Elo player ladder and football league table calculator",
    long_about = "Ladder League keeps an Elo-rated player ladder and a 3/1/0 football \
                 league table in memory, applies recorded results and prints the \
                 resulting standings."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without running a command")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the demo ladder
    Demo,
    /// Apply an event script to a fresh session and print the results
    Replay {
        /// TOML file with [[events]] entries
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
    /// Preview the ratings after a decisive game
    Elo {
        /// Winner's rating before the game
        winner: i32,
        /// Loser's rating before the game
        loser: i32,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    ladder_league::config::validate_config(&config)?;
    Ok(config)
}

fn new_session(config: &AppConfig) -> Result<Session> {
    Session::from_config(
        config,
        Box::new(SequentialIdGenerator::new()),
        Box::new(SystemClock),
    )
    .context("Failed to set up session")
}

fn ladder_json(session: &Session, config: &AppConfig) -> serde_json::Value {
    let ladder = session.ladder();
    serde_json::json!({
        "standings": session.ladder_standings(),
        "summary": ladder.summary(),
        "history": ladder.recent_history(config.ladder.history_limit),
    })
}

fn league_json(session: &Session, config: &AppConfig) -> serde_json::Value {
    let league = session.league();
    let rosters: Vec<_> = league
        .teams()
        .iter()
        .map(|t| {
            serde_json::json!({
                "team_id": t.id,
                "roster": league.roster(&t.id).unwrap_or_default(),
            })
        })
        .collect();
    serde_json::json!({
        "standings": session.league_standings(),
        "summary": league.summary(),
        "history": league.recent_history(config.league.history_limit),
        "rosters": rosters,
    })
}

fn print_ladder(session: &Session, config: &AppConfig) {
    let ladder = session.ladder();
    let history = ladder.recent_history(config.ladder.history_limit);

    println!("{}", render::ladder_summary(&ladder.summary()));
    print!("{}", render::ladder_table(&session.ladder_standings()));
    if !history.is_empty() {
        println!();
        print!("{}", render::ladder_history(&history));
    }
}

fn print_league(session: &Session, config: &AppConfig) {
    let league = session.league();
    let history = league.recent_history(config.league.history_limit);

    println!("{}", render::league_summary(&league.summary()));
    print!("{}", render::league_table(&session.league_standings()));
    if !history.is_empty() {
        println!();
        print!("{}", render::league_history(&history));
    }
    for team in league.teams().iter().filter(|t| !t.roster.is_empty()) {
        if let Some(entries) = league.roster(&team.id) {
            println!();
            print!("{}", render::roster(team, &entries));
        }
    }
}

fn print_rejections(report: &ReplayReport) {
    println!("Applied {} events", report.applied);
    for rejected in &report.rejected {
        println!("  event {} rejected: {}", rejected.index, rejected.error);
    }
}

fn run_replay(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let script = Script::from_toml_str(&contents)
        .with_context(|| format!("Invalid script {}", path.display()))?;
    info!(
        "Replaying {} events from {}",
        script.events.len(),
        path.display()
    );

    let mut session = new_session(config)?;
    let report = script.replay(&mut session);

    if json {
        let value = serde_json::json!({
            "report": report,
            "ladder": ladder_json(&session, config),
            "league": league_json(&session, config),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_rejections(&report);
    if !session.ladder().players().is_empty() {
        println!();
        print_ladder(&session, config);
    }
    if !session.league().teams().is_empty() {
        println!();
        print_league(&session, config);
    }
    Ok(())
}

fn run_elo(config: &AppConfig, winner: i32, loser: i32, json: bool) -> Result<()> {
    let calculator = EloCalculator::new(config.ladder.elo_settings())?;
    let (new_winner, new_loser) = calculator.rate_decisive(winner, loser);

    if json {
        let value = serde_json::json!({
            "winner": { "old": winner, "new": new_winner, "expected": calculator.expected_score(winner, loser) },
            "loser": { "old": loser, "new": new_loser, "expected": calculator.expected_score(loser, winner) },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Winner: {} -> {} ({:+})", winner, new_winner, new_winner - winner);
        println!("Loser:  {} -> {} ({:+})", loser, new_loser, new_loser - loser);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} - K-factor {}, initial rating {}",
        config.service.name,
        ladder_league::VERSION,
        config.ladder.k_factor,
        config.ladder.initial_rating
    );

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let result = match &args.command {
        Some(Command::Replay { script }) => run_replay(&config, script, args.json),
        Some(Command::Elo { winner, loser }) => run_elo(&config, *winner, *loser, args.json),
        Some(Command::Demo) | None => {
            let mut session = new_session(&config)?;
            if session.ladder().players().is_empty() {
                session.seed_demo_players();
            }
            if args.json {
                let value = ladder_json(&session, &config);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_ladder(&session, &config);
            }
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }
    result
}
