use rocket::form::{self, error::ErrorKind};
use rocket::http::{ContentType, Status};
use rocket::serde::json::{self, Json};
use rocket::serde::{Deserialize, Serialize};
use rocket::{catch, get, post, Request, State};

use crate::database::{Score, Storage};
use crate::leaderboard;
use crate::request_error::{ErrorBody, RequestError, RequestResult};
use crate::validation::{self, ScoreSubmission, ValidationError};

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Health {
    pub status: String,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Readiness {
    pub ready: bool,
}

#[get("/healthz")]
pub fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok".to_owned(),
    })
}

/// Reports whether the score store answers a trivial query.
/// Failures are logged and reported as not ready, never as an error response.
#[get("/readyz")]
pub async fn readyz(storage: &State<Storage>) -> Json<Readiness> {
    let ready = match storage.ping().await {
        Ok(()) => true,
        Err(err) => {
            log::warn!(
                "readiness check against {} failed: {}",
                storage.path().display(),
                err
            );
            false
        }
    };

    Json(Readiness { ready })
}

/// Missing query fields read as `None`. A value that is present but fails
/// to decode is reported as `invalid`.
fn query_field(
    field: form::Result<'_, String>,
    invalid: ValidationError,
) -> Result<Option<String>, ValidationError> {
    match field {
        Ok(value) => Ok(Some(value)),
        Err(errors) if errors.iter().all(|err| matches!(err.kind, ErrorKind::Missing)) => Ok(None),
        Err(_) => Err(invalid),
    }
}

/// Fetches the ranked leaderboard, optionally for a single difficulty.
#[get("/leaderboard?<limit>&<difficulty>")]
pub async fn get_leaderboard(
    limit: form::Result<'_, String>,
    difficulty: form::Result<'_, String>,
    storage: &State<Storage>,
) -> RequestResult<Json<Vec<Score>>> {
    let limit = query_field(limit, ValidationError::Limit)?;
    let difficulty = query_field(difficulty, ValidationError::InvalidDifficulty)?;

    let limit = validation::parse_limit(limit.as_deref())?;
    let difficulty = validation::parse_difficulty_filter(difficulty.as_deref())?;

    let scores = leaderboard::ranked(storage, limit, difficulty).await?;
    Ok(Json(scores))
}

/// Validates and stores a new score.
/// Responds with the record read back from storage.
///
/// A body without a content type is parsed as JSON; any other
/// non-JSON content type is rejected as malformed.
#[post("/score", data = "<submission>")]
pub async fn submit_score(
    content_type: Option<&ContentType>,
    submission: Result<Json<ScoreSubmission>, json::Error<'_>>,
    storage: &State<Storage>,
) -> RequestResult<Json<Score>> {
    if let Some(content_type) = content_type.filter(|content_type| !content_type.is_json()) {
        return Err(RequestError::MalformedBody(format!(
            "expected application/json, got {}",
            content_type
        )));
    }

    let submission = submission
        .map_err(|err| RequestError::MalformedBody(err.to_string()))?
        .into_inner();
    let new_score = validation::validate_submission(submission)?;

    let score = leaderboard::submit(storage, &new_score).await?;
    log::info!(
        "stored score {} for {:?} on {} (id {})",
        score.score,
        score.name,
        score.difficulty,
        score.id
    );

    Ok(Json(score))
}

#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let reason = status.reason().unwrap_or("Unknown Error");
    (status, Json(ErrorBody::new(reason)))
}
