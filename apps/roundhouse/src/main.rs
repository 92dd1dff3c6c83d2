use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod config;
mod controller;
mod simulate;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use config::{load_settings, Settings};
use controller::{
    events::parse_command,
    orchestration::{apply_host_command, new_session, Outcome},
};
use simulate::run_simulation;
use ui::render::render_screen;

#[derive(Parser, Debug)]
#[command(name = "roundhouse", about = "One-phone party game for groups")]
struct Cli {
    /// Config file (defaults to ./roundhouse.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for game selection and random player picks.
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pass-and-play session on this terminal.
    Play,
    /// Scripted session printed as JSON.
    Simulate {
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,
        #[arg(long, default_value_t = 12)]
        rounds: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_settings(cli.config.as_deref())?;
    let mut settings = loaded.settings;
    if let Some(seed) = cli.seed {
        settings.rng_seed = Some(seed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    for note in &loaded.ignored {
        warn!("ignored setting: {note}");
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(&settings),
        Command::Simulate { players, rounds } => {
            let report = run_simulation(&settings, &players, rounds.max(1));
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn play(settings: &Settings) -> Result<()> {
    info!(
        enabled_modes = settings.enabled_modes.len(),
        seeded = settings.rng_seed.is_some(),
        "starting pass-and-play session"
    );

    let mut session = new_session(settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", render_screen(&session))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let outcome = match parse_command(&line) {
            Ok(command) => apply_host_command(&mut session, settings, command),
            Err(err) => Outcome::Message(err.to_string()),
        };

        match outcome {
            Outcome::Redraw => writeln!(stdout, "\n{}", render_screen(&session))?,
            Outcome::Message(message) => writeln!(stdout, "{message}")?,
            Outcome::Exit => break,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!(round = session.current_round(), "session closed");
    Ok(())
}
