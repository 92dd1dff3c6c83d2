use std::fmt::Write as _;

use shared::domain::{IntensityLevel, Screen};

use crate::controller::orchestration::HostSession;

fn intensity_badge(level: IntensityLevel) -> String {
    let dot = match level {
        IntensityLevel::Chill => "🟢",
        IntensityLevel::Medium => "🟡",
        IntensityLevel::Wild => "🔴",
    };
    format!("{dot} {}", level.label())
}

/// Text for the current screen, ending in the commands it accepts.
pub fn render_screen(session: &HostSession) -> String {
    let mut out = String::new();

    match session.screen() {
        Screen::Welcome => {
            out.push_str("ROUNDHOUSE\nOne-phone party game for groups\n\n[go]");
        }
        Screen::Setup => {
            out.push_str("Who's playing?\nAdd names or skip, then pass the phone in a circle.\n\n");
            for (seat, player) in session.players().iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", seat + 1, player.name);
            }
            let start = match session.players().len() {
                0 => "start".to_string(),
                n => format!("start ({n} players)"),
            };
            let _ = write!(out, "\n[add <name>] [remove <seat>] [{start}]");
        }
        Screen::RoundIntro => {
            let _ = writeln!(
                out,
                "Round {} - pick a game   {}",
                session.current_round(),
                intensity_badge(session.intensity())
            );
            out.push_str("\n[random] [play <mode>] [modes]");
            if session.can_end_game() {
                out.push_str(" [end]");
            }
        }
        Screen::PassPhone => {
            let name = session
                .current_player()
                .map(|player| player.name.as_str())
                .unwrap_or("the next player");
            let _ = write!(out, "📱 Pass the phone to {name}!\n\n[ready]");
        }
        Screen::Game => {
            let title = session
                .current_game_mode()
                .map(|mode| format!("{} {}", mode.emoji(), mode.display_name()))
                .unwrap_or_else(|| "No game selected".to_string());
            let _ = writeln!(
                out,
                "{title}   round {}   {}",
                session.current_round(),
                intensity_badge(session.intensity())
            );
            if let Some(player) = session.current_player() {
                let _ = writeln!(out, "Turn: {}", player.name);
            }
            for (seat, player) in session.players().iter().enumerate() {
                let _ = writeln!(out, "  {}. {:<16} {:>4}", seat + 1, player.name, player.score);
            }
            out.push_str("\n[score <seat> <delta>] [turn] [next] [quit]");
        }
        Screen::GameOver => {
            out.push_str("Game over!\n\nFinal scores\n");
            let standings = session.standings();
            for standing in &standings {
                let trophy = if standing.rank == 1 && standing.player.score > 0 {
                    "🏆 "
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "  {}. {trophy}{:<16} {:>4}",
                    standing.rank, standing.player.name, standing.player.score
                );
            }
            out.push_str("\n[again]");
        }
    }

    out
}
