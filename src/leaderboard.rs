use crate::database::{queries, Difficulty, NewScore, Score, Storage};

/// Returns the top `limit` scores, best first. Equal scores keep
/// submission order.
pub async fn ranked(
    storage: &Storage,
    limit: u32,
    difficulty: Option<Difficulty>,
) -> sqlx::Result<Vec<Score>> {
    let mut conn = storage.connect().await?;
    queries::top_scores(&mut conn, limit, difficulty).await
}

/// Stores a validated score and returns the record as it was persisted.
pub async fn submit(storage: &Storage, new_score: &NewScore) -> sqlx::Result<Score> {
    let created_at = now_timestamp();

    let mut conn = storage.connect().await?;
    let id = queries::insert_score(&mut conn, new_score, created_at).await?;
    queries::find_score(&mut conn, id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Current time in seconds since the unix epoch, with microsecond precision.
fn now_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
