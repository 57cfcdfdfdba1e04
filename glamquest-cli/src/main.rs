mod assets;
mod input;
mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use glamquest_game::{GameEngine, Strictness};

use assets::EventAssets;
use input::InputReader;
use menu::run_menu_loop;

#[derive(Debug, Parser)]
#[command(name = "glamquest", version)]
#[command(about = "Glamquest - a glamorous party adventure in your terminal")]
struct Args {
    /// Path to an event file (JSON array of event records)
    #[arg(long)]
    events: Option<PathBuf>,

    /// Seed for the session's random event draws
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Reject event files whose attribute keys are not known statistics
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    let engine = GameEngine::new(EventAssets::new(args.events));
    let mut session = engine
        .create_session(args.seed, strictness)
        .context("failed to start a new session")?;

    announce_banner();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    run_menu_loop(&mut session, &mut input)?;

    println!("Game Over.");
    Ok(())
}

fn announce_banner() {
    println!("{}", "✨ Welcome to Glamquest! ✨".bright_magenta().bold());
    println!("{}", "===========================".magenta());
}
