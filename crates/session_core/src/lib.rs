//! Pass-and-play session controller.
//!
//! Owns the roster, the turn and round counters, the active game mode and the
//! screen flow (welcome → setup → round-intro → pass-phone → game → game-over).
//! The screen layer and the mini-games read a [`SessionSnapshot`] and report
//! back through the controller's operations or [`SessionController::dispatch`].

use rand::{rngs::SmallRng, seq::index, Rng, SeedableRng};
use shared::{
    domain::{GameMode, IntensityLevel, Player, PlayerId, Screen},
    protocol::{SessionCommand, SessionSnapshot, Standing},
};
use tracing::{debug, info, warn};

pub mod navigation;
pub mod selection;

pub use navigation::{back_target, NavigationHistory, NoHistory, StackHistory, TransitionSource};
pub use selection::select_next_game_mode;

/// Round number at which a fresh game begins.
pub const FIRST_ROUND: u32 = 1;

#[derive(Debug, Clone, Default)]
struct SessionState {
    screen: Screen,
    players: Vec<Player>,
    current_player_index: usize,
    current_round: u32,
    current_game_mode: Option<GameMode>,
    round_history: Vec<GameMode>,
}

impl SessionState {
    fn advance_turn(&mut self) {
        self.current_player_index = match self.players.len() {
            0 => 0,
            len => (self.current_player_index + 1) % len,
        };
    }
}

pub struct SessionController<H = NoHistory> {
    state: SessionState,
    history: H,
    rng: SmallRng,
}

impl Default for SessionController<NoHistory> {
    fn default() -> Self {
        Self::new(NoHistory)
    }
}

impl<H: NavigationHistory> SessionController<H> {
    pub fn new(history: H) -> Self {
        Self::with_rng(history, SmallRng::from_os_rng())
    }

    /// Deterministic mode selection and player picks for a given seed.
    pub fn with_seed(history: H, seed: u64) -> Self {
        Self::with_rng(history, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(history: H, rng: SmallRng) -> Self {
        Self {
            state: SessionState::default(),
            history,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn current_player_index(&self) -> usize {
        self.state.current_player_index
    }

    pub fn current_round(&self) -> u32 {
        self.state.current_round
    }

    pub fn current_game_mode(&self) -> Option<GameMode> {
        self.state.current_game_mode
    }

    pub fn round_history(&self) -> &[GameMode] {
        &self.state.round_history
    }

    /// Always derived from the current round, never stored.
    pub fn intensity(&self) -> IntensityLevel {
        IntensityLevel::for_round(self.state.current_round)
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.state.screen,
            players: self.state.players.clone(),
            current_player_index: self.state.current_player_index,
            current_round: self.state.current_round,
            current_game_mode: self.state.current_game_mode,
            intensity: self.intensity(),
            round_history: self.state.round_history.clone(),
        }
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.state.players.iter().find(|p| p.id == player_id)
    }

    /// Routes a reported event. Transitions tagged [`TransitionSource::HistoryReplay`]
    /// change the screen without recording a navigation entry.
    pub fn dispatch(&mut self, command: SessionCommand, source: TransitionSource) {
        debug!(command = command.name(), ?source, "applying session command");
        match command {
            SessionCommand::AddPlayer { name } => {
                self.add_player(&name);
            }
            SessionCommand::RemovePlayer { player_id } => {
                self.remove_player(player_id);
            }
            SessionCommand::UpdatePlayerScore { player_id, delta } => {
                self.update_player_score(player_id, delta);
            }
            SessionCommand::StartGame => self.apply_start_game(source),
            SessionCommand::SelectGameMode {
                mode,
                enabled_modes,
            } => {
                self.select_game_mode(mode, enabled_modes.as_deref());
            }
            SessionCommand::NextRound => self.apply_next_round(source),
            SessionCommand::NextPlayer => self.next_player(),
            SessionCommand::SwitchGame => self.apply_switch_game(source),
            SessionCommand::EndGame => self.apply_end_game(source),
            SessionCommand::ResetGame => self.reset_game(),
            SessionCommand::SetScreen { screen } => self.enter(screen, source),
        }
    }

    /// Appends a player in turn order. Names are trimmed; blank names are ignored.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        if name.trim().is_empty() {
            warn!("ignoring player with blank name");
            return None;
        }

        let player = Player::new(name);
        let player_id = player.id;
        debug!(player_id = %player_id, name = %player.name, "player added");
        self.state.players.push(player);
        Some(player_id)
    }

    /// Removes a player, keeping the turn pointer on the same player where possible.
    pub fn remove_player(&mut self, player_id: PlayerId) -> bool {
        let Some(position) = self.state.players.iter().position(|p| p.id == player_id) else {
            warn!(player_id = %player_id, "remove_player: unknown player");
            return false;
        };

        self.state.players.remove(position);
        let remaining = self.state.players.len();
        let current = self.state.current_player_index;
        self.state.current_player_index = if remaining == 0 {
            0
        } else if position < current {
            current - 1
        } else if current >= remaining {
            0
        } else {
            current
        };

        debug!(player_id = %player_id, remaining, "player removed");
        true
    }

    pub fn update_player_score(&mut self, player_id: PlayerId, delta: i64) -> bool {
        let Some(player) = self.state.players.iter_mut().find(|p| p.id == player_id) else {
            warn!(player_id = %player_id, "update_player_score: unknown player");
            return false;
        };

        player.score = player.score.saturating_add(delta);
        debug!(player_id = %player_id, delta, score = player.score, "score updated");
        true
    }

    pub fn start_game(&mut self) {
        self.apply_start_game(TransitionSource::UserAction);
    }

    fn apply_start_game(&mut self, source: TransitionSource) {
        self.state.current_round = FIRST_ROUND;
        self.state.current_player_index = 0;
        self.state.round_history.clear();
        self.state.current_game_mode = None;
        self.enter(Screen::RoundIntro, source);
        info!(players = self.state.players.len(), "game started");
    }

    /// Sets the active mode, drawing a weighted random one when `mode` is `None`.
    /// The screen is left alone; see [`Self::confirm_game_mode`].
    pub fn select_game_mode(
        &mut self,
        mode: Option<GameMode>,
        enabled_modes: Option<&[GameMode]>,
    ) -> GameMode {
        let selected = match mode {
            Some(mode) => mode,
            None => select_next_game_mode(
                &self.state.round_history,
                enabled_modes.unwrap_or(GameMode::ALL),
                &mut self.rng,
            ),
        };

        self.state.current_game_mode = Some(selected);
        self.state.round_history.push(selected);
        debug!(mode = %selected, forced = mode.is_some(), "game mode selected");
        selected
    }

    /// Round-intro confirmation: select a mode, then hand the phone over
    /// (or go straight to the game when nobody entered a name).
    pub fn confirm_game_mode(
        &mut self,
        mode: Option<GameMode>,
        enabled_modes: Option<&[GameMode]>,
    ) -> GameMode {
        let selected = self.select_game_mode(mode, enabled_modes);
        self.set_screen(self.play_screen());
        selected
    }

    pub fn play_screen(&self) -> Screen {
        if self.state.players.is_empty() {
            Screen::Game
        } else {
            Screen::PassPhone
        }
    }

    pub fn next_round(&mut self) {
        self.apply_next_round(TransitionSource::UserAction);
    }

    fn apply_next_round(&mut self, source: TransitionSource) {
        self.state.current_round = self.state.current_round.saturating_add(1);
        self.state.advance_turn();
        self.enter(Screen::PassPhone, source);
        debug!(
            round = self.state.current_round,
            intensity = self.intensity().level(),
            player_index = self.state.current_player_index,
            "round advanced"
        );
    }

    /// Passes the turn without starting a new round.
    pub fn next_player(&mut self) {
        self.state.advance_turn();
        debug!(player_index = self.state.current_player_index, "turn advanced");
    }

    pub fn switch_game(&mut self) {
        self.apply_switch_game(TransitionSource::UserAction);
    }

    fn apply_switch_game(&mut self, source: TransitionSource) {
        self.state.current_game_mode = None;
        self.enter(Screen::RoundIntro, source);
    }

    pub fn end_game(&mut self) {
        self.apply_end_game(TransitionSource::UserAction);
    }

    fn apply_end_game(&mut self, source: TransitionSource) {
        self.enter(Screen::GameOver, source);
        info!(round = self.state.current_round, "game ended");
    }

    /// Full restart, roster included.
    pub fn reset_game(&mut self) {
        self.state = SessionState::default();
        info!("session reset");
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.enter(screen, TransitionSource::UserAction);
    }

    /// Host back signal. Returns whether the screen changed. Going back to
    /// welcome drops round, mode and history but keeps the roster.
    pub fn navigate_back(&mut self) -> bool {
        let from = self.state.screen;
        let Some(target) = back_target(from) else {
            return false;
        };

        if target == Screen::Welcome {
            self.state = SessionState {
                players: std::mem::take(&mut self.state.players),
                ..SessionState::default()
            };
        }
        self.enter(target, TransitionSource::HistoryReplay);
        debug!(%from, to = %target, "navigated back");
        true
    }

    fn enter(&mut self, screen: Screen, source: TransitionSource) {
        if source.records_history() {
            self.history.push(screen);
        }
        self.state.screen = screen;
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.state.players.get(self.state.current_player_index)
    }

    /// Uniform pick. With `exclude_current` and more than one player, the
    /// current player is never returned.
    pub fn random_player(&mut self, exclude_current: bool) -> Option<&Player> {
        let len = self.state.players.len();
        if len == 0 {
            return None;
        }

        let index = if exclude_current && len > 1 {
            let current = self.state.current_player_index.min(len - 1);
            let pick = self.rng.random_range(0..len - 1);
            if pick >= current {
                pick + 1
            } else {
                pick
            }
        } else {
            self.rng.random_range(0..len)
        };

        self.state.players.get(index)
    }

    /// Two distinct players drawn uniformly, or `None` with fewer than two.
    pub fn random_pair(&mut self) -> Option<(&Player, &Player)> {
        let len = self.state.players.len();
        if len < 2 {
            return None;
        }

        let picks = index::sample(&mut self.rng, len, 2);
        Some((
            &self.state.players[picks.index(0)],
            &self.state.players[picks.index(1)],
        ))
    }

    /// The round-intro screen only offers ending once a round has been played
    /// and there are scores to show.
    pub fn can_end_game(&self) -> bool {
        self.state.current_round > FIRST_ROUND && !self.state.players.is_empty()
    }

    /// Final scoreboard: highest score first, ties in turn order sharing a rank.
    pub fn standings(&self) -> Vec<Standing> {
        let mut sorted: Vec<&Player> = self.state.players.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        let mut standings: Vec<Standing> = Vec::with_capacity(sorted.len());
        for (position, player) in sorted.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(prev) if prev.player.score == player.score => prev.rank,
                _ => position + 1,
            };
            standings.push(Standing {
                rank,
                player: player.clone(),
            });
        }
        standings
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
