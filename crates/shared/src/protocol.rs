use serde::{Deserialize, Serialize};

use crate::domain::{GameMode, IntensityLevel, Player, PlayerId, Screen};

/// Events the screen layer and the mini-games report back to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionCommand {
    AddPlayer {
        name: String,
    },
    RemovePlayer {
        player_id: PlayerId,
    },
    UpdatePlayerScore {
        player_id: PlayerId,
        delta: i64,
    },
    StartGame,
    SelectGameMode {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<GameMode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enabled_modes: Option<Vec<GameMode>>,
    },
    NextRound,
    NextPlayer,
    SwitchGame,
    EndGame,
    ResetGame,
    SetScreen {
        screen: Screen,
    },
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => "add_player",
            Self::RemovePlayer { .. } => "remove_player",
            Self::UpdatePlayerScore { .. } => "update_player_score",
            Self::StartGame => "start_game",
            Self::SelectGameMode { .. } => "select_game_mode",
            Self::NextRound => "next_round",
            Self::NextPlayer => "next_player",
            Self::SwitchGame => "switch_game",
            Self::EndGame => "end_game",
            Self::ResetGame => "reset_game",
            Self::SetScreen { .. } => "set_screen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub current_round: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_game_mode: Option<GameMode>,
    pub intensity: IntensityLevel,
    pub round_history: Vec<GameMode>,
}

/// One row of the game-over scoreboard. Players with equal scores share a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: usize,
    pub player: Player,
}
