use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_cpu::ai::Difficulty;
use connect_four_cpu::arena::run_series;
use connect_four_cpu::config::AppConfig;

/// Play CPU tiers against each other and report the results.
#[derive(Parser)]
#[command(name = "arena", about = "Pit Connect 4 CPU tiers against each other")]
struct Cli {
    /// Tier listed first in the report: easy, medium or hard
    #[arg(long)]
    first: Option<Difficulty>,

    /// Opposing tier: easy, medium or hard
    #[arg(long)]
    second: Option<Difficulty>,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Seed for reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the first tier on Player 1 for every game
    #[arg(long)]
    no_swap: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(first) = cli.first {
        app_config.arena.first = first;
    }
    if let Some(second) = cli.second {
        app_config.arena.second = second;
    }
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if cli.no_swap {
        app_config.arena.swap_sides = false;
    }
    app_config.validate().context("validating arena settings")?;

    let seed = cli.seed.or(app_config.cpu.seed);
    let summary = run_series(&app_config.arena, &app_config.heuristic, seed)
        .context("playing series")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        );
    } else {
        println!("{} vs {} over {} games", summary.first, summary.second, summary.games);
        println!("-------------------------------------------");
        println!(
            "{:<8} wins: {:>4} ({:.1}%)",
            summary.first,
            summary.first_wins,
            summary.first_win_rate() * 100.0
        );
        println!("{:<8} wins: {:>4}", summary.second, summary.second_wins);
        println!("draws:         {:>4}", summary.draws);
        println!("avg length:    {:>6.1} plies", summary.avg_game_length);
    }

    Ok(())
}

