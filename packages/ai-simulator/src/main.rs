//! AI Simulator CLI - batch all-AI Werewolf games in memory.
//!
//! Useful for balancing role bags and for catching regressions in the engine:
//! every game is seeded, so any interesting result can be replayed exactly.

mod metrics;
mod output;
mod simulator;
mod types;

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};
use werewolf_engine::speech::registry;
use werewolf_engine::{Alignment, GameConfig, Language, RoleName};

use metrics::{build_game_metrics, RunConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use types::{MetricsLevel, OutputFormat, SimulatorError};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Werewolf simulator for balancing and regression runs")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seats at the table (6-8; other sizes use the 6-player bag)
    #[arg(short, long, default_value = "6")]
    players: usize,

    /// Replace the Hunter with a Villager
    #[arg(long)]
    no_hunter: bool,

    /// Base seed; game N uses seed + N - 1. Random per game when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Speech provider id (gpt, openai, offline)
    #[arg(long, default_value = "offline")]
    provider: String,

    /// Speech language tag (en, zh-Hant)
    #[arg(long, default_value = "en")]
    language: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let factory = registry::by_name(&args.provider)
        .ok_or_else(|| SimulatorError::UnknownProvider(args.provider.clone()))?;
    let language = Language::parse(&args.language)
        .ok_or_else(|| SimulatorError::UnknownLanguage(args.language.clone()))?;
    let speech = (factory.make)();

    if args.show_output {
        info!(
            games = args.games,
            players = args.players,
            hunter = !args.no_hunter,
            provider = speech.name(),
            "Starting AI simulator"
        );
        info!("Output directory: {}", args.output_dir);
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let run_config = RunConfig {
        players: args.players,
        allow_hunter: !args.no_hunter,
        provider: speech.name().to_string(),
        language: language.tag().to_string(),
        total_games: args.games,
    };

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num - 1)),
            None => rand::random(),
        };
        let config = GameConfig::default()
            .with_players(args.players)
            .with_hunter(!args.no_hunter)
            .with_language(language)
            .with_seed(game_seed);

        match Simulator::new(speech.clone(), config).simulate_game().await {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    run_config.clone(),
                    &result,
                    duration_ms,
                    args.metrics_level,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game = game_num, seed = game_seed, winner = %result.winner, days = result.days, "Game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, seed = game_seed, "Game failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let games = results.len() as f64;
    let good_wins = results.iter().filter(|r| r.winner == Alignment::Good).count();
    let avg_days = results.iter().map(|r| f64::from(r.days)).sum::<f64>() / games;

    println!("\n=== Results by Side ===");
    println!(
        "Good: {} wins ({:.1}%)",
        good_wins,
        good_wins as f64 / games * 100.0
    );
    println!(
        "Werewolf: {} wins ({:.1}%)",
        results.len() - good_wins,
        (results.len() - good_wins) as f64 / games * 100.0
    );
    println!("Average length: {:.1} days", avg_days);

    // role -> (seats dealt, seats alive at the end)
    let mut survival: BTreeMap<RoleName, (u32, u32)> = BTreeMap::new();
    for player in results.iter().flat_map(|r| &r.players) {
        let entry = survival.entry(player.role.name).or_default();
        entry.0 += 1;
        if player.is_alive() {
            entry.1 += 1;
        }
    }

    println!("\n=== Survival by Role ===");
    for (role, (dealt, alive)) in survival {
        println!(
            "{}: survived {}/{} ({:.1}%)",
            role,
            alive,
            dealt,
            alive as f64 / dealt as f64 * 100.0
        );
    }
}
