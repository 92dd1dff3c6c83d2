//! Applies host commands to the session, one screen's buttons at a time.

use session_core::{SessionController, StackHistory, TransitionSource};
use shared::{domain::Screen, protocol::SessionCommand};

use crate::config::Settings;
use crate::controller::events::{HostCommand, HELP};

pub type HostSession = SessionController<StackHistory>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The screen may have changed; redraw it.
    Redraw,
    Message(String),
    Exit,
}

pub fn new_session(settings: &Settings) -> HostSession {
    match settings.rng_seed {
        Some(seed) => SessionController::with_seed(StackHistory::new(), seed),
        None => SessionController::new(StackHistory::new()),
    }
}

fn dispatch_session_command(session: &mut HostSession, command: SessionCommand) {
    tracing::debug!(command = command.name(), screen = %session.screen(), "queued ui->session command");
    session.dispatch(command, TransitionSource::UserAction);
}

pub fn apply_host_command(
    session: &mut HostSession,
    settings: &Settings,
    command: HostCommand,
) -> Outcome {
    let screen = session.screen();
    let name = command.name();

    match (screen, command) {
        (_, HostCommand::Help) => Outcome::Message(HELP.to_string()),
        (_, HostCommand::Exit) => Outcome::Exit,
        (_, HostCommand::Status) => match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => Outcome::Message(json),
            Err(err) => Outcome::Message(format!("could not render status: {err}")),
        },
        (_, HostCommand::Back) => {
            session.history_mut().pop();
            if session.navigate_back() {
                Outcome::Redraw
            } else {
                Outcome::Message("nothing to go back to".to_string())
            }
        }
        (_, HostCommand::Reset) => {
            dispatch_session_command(session, SessionCommand::ResetGame);
            Outcome::Redraw
        }

        (Screen::Welcome, HostCommand::Proceed) => {
            dispatch_session_command(
                session,
                SessionCommand::SetScreen {
                    screen: Screen::Setup,
                },
            );
            Outcome::Redraw
        }

        (Screen::Setup, HostCommand::AddPlayer(player_name)) => {
            if player_name.trim().is_empty() {
                return Outcome::Message("enter a name".to_string());
            }
            dispatch_session_command(session, SessionCommand::AddPlayer { name: player_name });
            Outcome::Redraw
        }
        (Screen::Setup, HostCommand::RemovePlayer(seat)) => match seat_player(session, seat) {
            Some(player_id) => {
                dispatch_session_command(session, SessionCommand::RemovePlayer { player_id });
                Outcome::Redraw
            }
            None => no_such_seat(seat),
        },
        (Screen::Setup, HostCommand::Start) => {
            dispatch_session_command(session, SessionCommand::StartGame);
            Outcome::Redraw
        }

        (Screen::RoundIntro, HostCommand::RandomGame) => {
            session.confirm_game_mode(None, Some(settings.enabled_modes.as_slice()));
            Outcome::Redraw
        }
        (Screen::RoundIntro, HostCommand::PlayGame(mode)) => {
            if !settings.enabled_modes.contains(&mode) {
                return Outcome::Message(format!("{} is not enabled", mode.display_name()));
            }
            session.confirm_game_mode(Some(mode), Some(settings.enabled_modes.as_slice()));
            Outcome::Redraw
        }
        (Screen::RoundIntro, HostCommand::ListModes) => {
            let lines: Vec<String> = settings
                .enabled_modes
                .iter()
                .map(|mode| {
                    format!(
                        "{} {:<18} {}",
                        mode.emoji(),
                        mode.as_str(),
                        mode.description()
                    )
                })
                .collect();
            Outcome::Message(lines.join("\n"))
        }
        (Screen::RoundIntro, HostCommand::EndGame) => {
            if !session.can_end_game() {
                return Outcome::Message("play a round with named players first".to_string());
            }
            dispatch_session_command(session, SessionCommand::EndGame);
            Outcome::Redraw
        }

        (Screen::PassPhone, HostCommand::Ready) => {
            dispatch_session_command(
                session,
                SessionCommand::SetScreen {
                    screen: Screen::Game,
                },
            );
            Outcome::Redraw
        }

        (Screen::Game, HostCommand::Score { seat, delta }) => match seat_player(session, seat) {
            Some(player_id) => {
                dispatch_session_command(
                    session,
                    SessionCommand::UpdatePlayerScore { player_id, delta },
                );
                Outcome::Redraw
            }
            None => no_such_seat(seat),
        },
        (Screen::Game, HostCommand::NextTurn) => {
            dispatch_session_command(session, SessionCommand::NextPlayer);
            Outcome::Redraw
        }
        (Screen::Game, HostCommand::NextRound) => {
            dispatch_session_command(session, SessionCommand::NextRound);
            if session.players().is_empty() {
                // Nobody to pass the phone to.
                dispatch_session_command(
                    session,
                    SessionCommand::SetScreen {
                        screen: Screen::Game,
                    },
                );
            }
            Outcome::Redraw
        }
        (Screen::Game, HostCommand::Quit) => {
            dispatch_session_command(session, SessionCommand::SwitchGame);
            Outcome::Redraw
        }

        (Screen::GameOver, HostCommand::PlayAgain) => {
            dispatch_session_command(
                session,
                SessionCommand::SetScreen {
                    screen: Screen::Welcome,
                },
            );
            Outcome::Redraw
        }

        (screen, _) => {
            tracing::debug!(command = name, %screen, "command not available on screen");
            Outcome::Message(format!("'{name}' is not available on the {screen} screen"))
        }
    }
}

fn seat_player(session: &HostSession, seat: usize) -> Option<shared::domain::PlayerId> {
    seat.checked_sub(1)
        .and_then(|index| session.players().get(index))
        .map(|player| player.id)
}

fn no_such_seat(seat: usize) -> Outcome {
    Outcome::Message(format!("there is no seat {seat}"))
}
