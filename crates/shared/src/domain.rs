use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ParseGameModeError, ParseScreenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
}

impl Player {
    /// Creates a player with a fresh id and a zero score. The name is stored trimmed.
    pub fn new(name: &str) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.trim().to_string(),
            score: 0,
        }
    }
}

macro_rules! game_modes {
    ($($variant:ident => $id:literal, $name:literal, $emoji:literal, $description:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum GameMode {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl GameMode {
            /// The fixed catalog shared by the mode picker and the mini-games, in picker order.
            pub const ALL: &'static [GameMode] = &[$(GameMode::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            pub fn emoji(&self) -> &'static str {
                match self {
                    $(Self::$variant => $emoji,)+
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }
        }

        impl FromStr for GameMode {
            type Err = ParseGameModeError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim() {
                    $($id => Ok(Self::$variant),)+
                    other => Err(ParseGameModeError(other.to_string())),
                }
            }
        }
    };
}

game_modes! {
    TruthOrDare => "truth-or-dare", "Truth or Dare", "🤫",
        "Pick truth or dare: answer honestly or complete a challenge.";
    HotSeat => "hot-seat", "Hot Seat", "🔥",
        "One player in the spotlight. The group votes on \"most likely to\" questions.";
    Trivia => "trivia", "Trivia", "🧠",
        "Quick-fire questions. Wrong answer means a drink.";
    WouldYouRather => "would-you-rather", "Would You Rather", "🤔",
        "Spicy hypotheticals. Debate it out and the minority drinks.";
    Challenges => "challenges", "Challenges", "💪",
        "Physical dares, social missions and creative tasks. Complete it or drink.";
    HotTakes => "hot-takes", "Hot Takes", "🌶️",
        "Controversial opinions. Vote agree or disagree and the minority drinks.";
    Wildcard => "wildcard", "Wildcard", "🃏",
        "Weird, chaotic one-off prompts that defy categorization.";
    Wavelength => "wavelength", "Wavelength", "📡",
        "Rate something on a spectrum. Closest to the group wins.";
    HerdMentality => "herd-mentality", "Herd Mentality", "🐑",
        "Everyone shouts an answer. Match the majority or drink.";
    CapOrFax => "cap-or-fax", "Cap or Fax", "🧢",
        "One player tells a story. Everyone votes on whether it was real.";
    KingsCup => "kings-cup", "Kings Cup", "👑",
        "Draw cards and follow the rules. Classic drinking card game.";
    LiarsDice => "liars-dice", "Liars Dice", "🎲",
        "Bid on hidden dice and call out the liar.";
    RideTheBus => "ride-the-bus", "Ride the Bus", "🚌",
        "Guess the card: higher or lower, red or black, in or out.";
    Slevens => "slevens", "Slevens", "⚡",
        "Roll for 7, 11 or doubles and race your opponent.";
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Welcome,
    Setup,
    RoundIntro,
    PassPhone,
    Game,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Setup => "setup",
            Self::RoundIntro => "round-intro",
            Self::PassPhone => "pass-phone",
            Self::Game => "game",
            Self::GameOver => "game-over",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "welcome" => Ok(Self::Welcome),
            "setup" => Ok(Self::Setup),
            "round-intro" => Ok(Self::RoundIntro),
            "pass-phone" => Ok(Self::PassPhone),
            "game" => Ok(Self::Game),
            "game-over" => Ok(Self::GameOver),
            other => Err(ParseScreenError(other.to_string())),
        }
    }
}

/// Content tier eligible for selection, derived from the round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum IntensityLevel {
    #[default]
    Chill = 1,
    Medium = 2,
    Wild = 3,
}

impl IntensityLevel {
    /// Last round played at `Chill`.
    pub const CHILL_UNTIL_ROUND: u32 = 5;
    /// Last round played at `Medium`.
    pub const MEDIUM_UNTIL_ROUND: u32 = 12;

    /// Rounds 1-5 are chill, 6-12 medium, 13 and beyond wild. Round 0 (no game yet) is chill.
    pub fn for_round(round: u32) -> Self {
        if round <= Self::CHILL_UNTIL_ROUND {
            Self::Chill
        } else if round <= Self::MEDIUM_UNTIL_ROUND {
            Self::Medium
        } else {
            Self::Wild
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chill => "Chill",
            Self::Medium => "Medium",
            Self::Wild => "Wild",
        }
    }

    /// Whether content tagged with `content_level` may be shown at this intensity.
    pub fn admits(&self, content_level: IntensityLevel) -> bool {
        content_level <= *self
    }
}

impl From<IntensityLevel> for u8 {
    fn from(value: IntensityLevel) -> Self {
        value.level()
    }
}

impl TryFrom<u8> for IntensityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Chill),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Wild),
            other => Err(format!("intensity level out of range: {other}")),
        }
    }
}
