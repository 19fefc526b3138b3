use crate::error::LadderError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Ordinal skill attainment for one checklist item.
///
/// Stored as an integer column (0..=4) so existing sheet data stays readable.
/// `Independent` (3) is the threshold at which an item counts as cleared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    #[default]
    NotPerformed,
    Observed,
    Assisted,
    Independent,
    Instructs,
}

impl Level {
    /// Threshold for "自立" — the cleared state.
    pub const CLEARED: Level = Level::Independent;

    pub fn all() -> &'static [Level] {
        &[
            Level::NotPerformed,
            Level::Observed,
            Level::Assisted,
            Level::Independent,
            Level::Instructs,
        ]
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// UI label, matching the vocabulary used on the ward.
    pub fn label(self) -> &'static str {
        match self {
            Level::NotPerformed => "未実施",
            Level::Observed => "Lv1: 見学",
            Level::Assisted => "Lv2: 実施(介助有)",
            Level::Independent => "Lv3: 自立(OK)",
            Level::Instructs => "Lv4: 指導可",
        }
    }

    pub fn is_cleared(self) -> bool {
        self >= Level::CLEARED
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Level {
    type Error = LadderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::NotPerformed),
            1 => Ok(Level::Observed),
            2 => Ok(Level::Assisted),
            3 => Ok(Level::Independent),
            4 => Ok(Level::Instructs),
            other => Err(LadderError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level as u8
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
