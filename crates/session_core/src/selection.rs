//! Weighted game-mode selection that steers away from recently played modes.

use rand::Rng;
use shared::domain::GameMode;

/// Number of trailing history entries that count as "recent".
pub const RECENT_WINDOW: usize = 3;
pub const BASE_WEIGHT: u32 = 10;
/// Weight removed per appearance in the recent window.
pub const RECENT_PENALTY: u32 = 3;
pub const MIN_WEIGHT: u32 = 1;

pub fn recent_window(history: &[GameMode]) -> &[GameMode] {
    &history[history.len().saturating_sub(RECENT_WINDOW)..]
}

pub fn mode_weight(mode: GameMode, recent: &[GameMode]) -> u32 {
    let appearances = recent.iter().filter(|played| **played == mode).count() as u32;
    BASE_WEIGHT
        .saturating_sub(RECENT_PENALTY.saturating_mul(appearances))
        .max(MIN_WEIGHT)
}

/// Picks the next mode from `enabled` (the full catalog when empty).
///
/// A mode played in all of the last three rounds is about ten times less likely
/// than an unplayed one, but never impossible.
pub fn select_next_game_mode<R: Rng + ?Sized>(
    history: &[GameMode],
    enabled: &[GameMode],
    rng: &mut R,
) -> GameMode {
    let candidates = if enabled.is_empty() {
        GameMode::ALL
    } else {
        enabled
    };
    let recent = recent_window(history);
    let weights: Vec<u32> = candidates
        .iter()
        .map(|mode| mode_weight(*mode, recent))
        .collect();
    let total: u32 = weights.iter().sum();

    let mut draw = rng.random::<f64>() * f64::from(total);
    for (mode, weight) in candidates.iter().zip(&weights) {
        draw -= f64::from(*weight);
        if draw <= 0.0 {
            return *mode;
        }
    }

    candidates[0]
}
