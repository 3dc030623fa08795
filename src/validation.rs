use rocket::serde::Deserialize;
#[cfg(test)]
use rocket::serde::Serialize;

use crate::database::{Difficulty, GameScore, NewScore};

pub const MAX_NAME_LENGTH: usize = 20;
pub const PLACEHOLDER_NAME: &str = "Player";

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Score submission exactly as the client sent it.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[cfg_attr(test, derive(Serialize))]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub name: String,
    pub score: GameScore,
    pub difficulty: String,
}

impl ScoreSubmission {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, score: GameScore, difficulty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            difficulty: difficulty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must be between 1 and 20 characters")]
    NameLength,
    #[error("score must be a non-negative integer")]
    NegativeScore,
    #[error("limit must be an integer between 1 and 100")]
    Limit,
    #[error("invalid difficulty")]
    InvalidDifficulty,
}

/// Reduces a display name to letters, digits, space, `-`, `_` and `.`,
/// at most [`MAX_NAME_LENGTH`] characters long.
/// Falls back to [`PLACEHOLDER_NAME`] when nothing is left.
pub fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.'))
        .take(MAX_NAME_LENGTH)
        .collect();

    if sanitized.is_empty() {
        PLACEHOLDER_NAME.to_owned()
    } else {
        sanitized
    }
}

/// Checks a raw submission before anything touches storage.
///
/// Shape errors (name length, negative score) are reported before the
/// difficulty is looked at.
pub fn validate_submission(submission: ScoreSubmission) -> Result<NewScore, ValidationError> {
    let name_length = submission.name.chars().count();
    if name_length == 0 || name_length > MAX_NAME_LENGTH {
        return Err(ValidationError::NameLength);
    }
    if submission.score < 0 {
        return Err(ValidationError::NegativeScore);
    }

    let name = sanitize_name(&submission.name);
    let difficulty = parse_difficulty(&submission.difficulty)?;

    Ok(NewScore::new(name, submission.score, difficulty))
}

pub fn parse_difficulty(difficulty: &str) -> Result<Difficulty, ValidationError> {
    difficulty
        .parse()
        .map_err(|_| ValidationError::InvalidDifficulty)
}

/// An absent or empty filter means all difficulties.
pub fn parse_difficulty_filter(
    difficulty: Option<&str>,
) -> Result<Option<Difficulty>, ValidationError> {
    match difficulty {
        None | Some("") => Ok(None),
        Some(difficulty) => parse_difficulty(difficulty).map(Some),
    }
}

pub fn parse_limit(limit: Option<&str>) -> Result<u32, ValidationError> {
    let limit = match limit {
        None => return Ok(DEFAULT_LIMIT),
        Some(limit) => limit.trim().parse::<i64>().map_err(|_| ValidationError::Limit)?,
    };

    match u32::try_from(limit) {
        Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(ValidationError::Limit),
    }
}
