//! Host navigation port and the fixed back-navigation table.

use shared::domain::Screen;

/// Who caused a transition. Only user actions record a navigation entry;
/// transitions replayed from the host's history must not push again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSource {
    UserAction,
    HistoryReplay,
}

impl TransitionSource {
    pub fn records_history(&self) -> bool {
        matches!(self, Self::UserAction)
    }
}

pub trait NavigationHistory {
    fn push(&mut self, screen: Screen);
}

impl<H: NavigationHistory + ?Sized> NavigationHistory for &mut H {
    fn push(&mut self, screen: Screen) {
        (**self).push(screen);
    }
}

impl<H: NavigationHistory + ?Sized> NavigationHistory for Box<H> {
    fn push(&mut self, screen: Screen) {
        (**self).push(screen);
    }
}

/// Discards every entry. For hosts without a back button.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl NavigationHistory for NoHistory {
    fn push(&mut self, _screen: Screen) {}
}

/// In-memory navigation stack.
#[derive(Debug, Clone, Default)]
pub struct StackHistory {
    entries: Vec<Screen>,
}

impl StackHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<Screen> {
        self.entries.pop()
    }

    pub fn entries(&self) -> &[Screen] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NavigationHistory for StackHistory {
    fn push(&mut self, screen: Screen) {
        self.entries.push(screen);
    }
}

pub fn back_target(screen: Screen) -> Option<Screen> {
    match screen {
        Screen::Welcome => None,
        Screen::Setup => Some(Screen::Welcome),
        Screen::RoundIntro => Some(Screen::Welcome),
        Screen::PassPhone => Some(Screen::RoundIntro),
        Screen::Game => Some(Screen::RoundIntro),
        Screen::GameOver => Some(Screen::Welcome),
    }
}
