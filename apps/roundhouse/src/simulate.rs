//! Scripted session: every round picks a weighted random game and awards a
//! point to a random player, then the game ends and the scoreboard is reported.

use serde::Serialize;
use shared::{
    domain::Screen,
    protocol::{SessionSnapshot, Standing},
};
use tracing::info;

use crate::config::Settings;
use crate::controller::orchestration::{new_session, HostSession};

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub standings: Vec<Standing>,
    pub snapshot: SessionSnapshot,
    pub navigation_entries: usize,
}

pub fn run_simulation(settings: &Settings, players: &[String], rounds: u32) -> SimulationReport {
    let mut session = new_session(settings);
    session.set_screen(Screen::Setup);
    for name in players {
        session.add_player(name);
    }

    session.start_game();
    for round in 1..=rounds {
        play_round(&mut session, settings);
        if round < rounds {
            session.next_round();
        }
    }
    session.end_game();

    info!(
        rounds = session.current_round(),
        players = session.players().len(),
        "simulation finished"
    );

    SimulationReport {
        standings: session.standings(),
        snapshot: session.snapshot(),
        navigation_entries: session.history().len(),
    }
}

fn play_round(session: &mut HostSession, settings: &Settings) {
    if session.screen() != Screen::RoundIntro {
        session.switch_game();
    }
    let mode = session.confirm_game_mode(None, Some(settings.enabled_modes.as_slice()));
    session.set_screen(Screen::Game);

    let winner = session.random_player(false).map(|player| player.id);
    if let Some(player_id) = winner {
        session.update_player_score(player_id, 1);
    }
    tracing::debug!(
        round = session.current_round(),
        mode = %mode,
        intensity = session.intensity().level(),
        "simulated round"
    );
}
