//! Typed-in host commands and their parse errors.

use shared::{domain::GameMode, error::ParseGameModeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Proceed,
    AddPlayer(String),
    /// 1-based seat number as shown on screen.
    RemovePlayer(usize),
    Start,
    RandomGame,
    PlayGame(GameMode),
    ListModes,
    Ready,
    Score {
        seat: usize,
        delta: i64,
    },
    NextTurn,
    NextRound,
    Quit,
    EndGame,
    PlayAgain,
    Back,
    Status,
    Reset,
    Help,
    Exit,
}

impl HostCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::AddPlayer(_) => "add",
            Self::RemovePlayer(_) => "remove",
            Self::Start => "start",
            Self::RandomGame => "random",
            Self::PlayGame(_) => "play",
            Self::ListModes => "modes",
            Self::Ready => "ready",
            Self::Score { .. } => "score",
            Self::NextTurn => "turn",
            Self::NextRound => "next",
            Self::Quit => "quit",
            Self::EndGame => "end",
            Self::PlayAgain => "again",
            Self::Back => "back",
            Self::Status => "status",
            Self::Reset => "reset",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("type a command, or 'help' to list them")]
    Empty,
    #[error("unknown command {0:?}; type 'help' to list commands")]
    Unknown(String),
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error(transparent)]
    UnknownMode(#[from] ParseGameModeError),
}

pub fn parse_command(line: &str) -> Result<HostCommand, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "go" | "proceed" => HostCommand::Proceed,
        "add" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "add",
                    what: "a player name",
                });
            }
            HostCommand::AddPlayer(rest.to_string())
        }
        "remove" | "rm" => HostCommand::RemovePlayer(parse_seat("remove", rest)?),
        "start" => HostCommand::Start,
        "random" => HostCommand::RandomGame,
        "play" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "play",
                    what: "a game mode id (see 'modes')",
                });
            }
            HostCommand::PlayGame(rest.parse()?)
        }
        "modes" => HostCommand::ListModes,
        "ready" => HostCommand::Ready,
        "score" => {
            let (seat, delta) = rest.split_once(char::is_whitespace).ok_or(
                InputError::MissingArgument {
                    command: "score",
                    what: "a seat number and a delta, e.g. 'score 2 -1'",
                },
            )?;
            HostCommand::Score {
                seat: parse_seat("score", seat)?,
                delta: parse_number(delta.trim())?,
            }
        }
        "turn" => HostCommand::NextTurn,
        "next" => HostCommand::NextRound,
        "quit" => HostCommand::Quit,
        "end" => HostCommand::EndGame,
        "again" => HostCommand::PlayAgain,
        "back" | "b" => HostCommand::Back,
        "status" => HostCommand::Status,
        "reset" => HostCommand::Reset,
        "help" | "?" => HostCommand::Help,
        "exit" => HostCommand::Exit,
        _ => return Err(InputError::Unknown(word.to_string())),
    };
    Ok(command)
}

fn parse_seat(command: &'static str, raw: &str) -> Result<usize, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingArgument {
            command,
            what: "a seat number",
        });
    }
    parse_number(raw)
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, InputError> {
    raw.parse()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}

pub const HELP: &str = "\
welcome     go
setup       add <name> | remove <seat> | start
round-intro random | play <mode> | modes | end
pass-phone  ready
game        score <seat> <delta> | turn | next | quit
game-over   again
anywhere    back | status | reset | help | exit";
