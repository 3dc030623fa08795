use rocket::serde::{Deserialize, Serialize};

pub type ScoreId = i64;
pub type GameScore = i64;

/// Game mode a score was achieved in. Scores are only ranked against
/// scores of the same difficulty when a filter is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid difficulty")]
pub struct InvalidDifficulty;

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = InvalidDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or(InvalidDifficulty)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A score as it is stored in the `scores` table.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Score {
    pub id: ScoreId,
    pub name: String,
    pub score: GameScore,
    pub difficulty: Difficulty,
    /// Seconds since the unix epoch, assigned by the server on insert.
    pub created_at: f64,
}

/// A validated submission that is ready to be inserted.
#[derive(Clone, PartialEq, Debug)]
pub struct NewScore {
    pub name: String,
    pub score: GameScore,
    pub difficulty: Difficulty,
}

impl NewScore {
    pub fn new(name: impl Into<String>, score: GameScore, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            score,
            difficulty,
        }
    }
}
