use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use super::{Difficulty, NewScore, Score, ScoreId};

const SELECT_SCORES: &str = "SELECT id, name, score, difficulty, created_at FROM scores";

// `id` only breaks ties between scores inserted within the same timestamp.
const RANKED_ORDER: &str = "ORDER BY score DESC, created_at ASC, id ASC LIMIT ?";

fn score_from_row(row: &SqliteRow) -> sqlx::Result<Score> {
    let difficulty: String = row.try_get("difficulty")?;
    let difficulty = difficulty
        .parse::<Difficulty>()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

    Ok(Score {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        score: row.try_get("score")?,
        difficulty,
        created_at: row.try_get("created_at")?,
    })
}

/// Fetches the best `limit` scores, optionally restricted to one difficulty.
pub async fn top_scores(
    conn: &mut SqliteConnection,
    limit: u32,
    difficulty: Option<Difficulty>,
) -> sqlx::Result<Vec<Score>> {
    let rows = match difficulty {
        Some(difficulty) => {
            let sql = format!("{} WHERE difficulty = ? {}", SELECT_SCORES, RANKED_ORDER);
            sqlx::query(&sql)
                .bind(difficulty.as_str())
                .bind(i64::from(limit))
                .fetch_all(&mut *conn)
                .await?
        }
        None => {
            let sql = format!("{} {}", SELECT_SCORES, RANKED_ORDER);
            sqlx::query(&sql)
                .bind(i64::from(limit))
                .fetch_all(&mut *conn)
                .await?
        }
    };

    rows.iter().map(score_from_row).collect()
}

/// Inserts a single score in one statement and returns the id assigned to it.
pub async fn insert_score(
    conn: &mut SqliteConnection,
    new_score: &NewScore,
    created_at: f64,
) -> sqlx::Result<ScoreId> {
    let row = sqlx::query(
        "INSERT INTO scores (name, score, difficulty, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(new_score.name.as_str())
    .bind(new_score.score)
    .bind(new_score.difficulty.as_str())
    .bind(created_at)
    .fetch_one(&mut *conn)
    .await?;

    row.try_get("id")
}

pub async fn find_score(conn: &mut SqliteConnection, id: ScoreId) -> sqlx::Result<Option<Score>> {
    let sql = format!("{} WHERE id = ?", SELECT_SCORES);
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(score_from_row).transpose()
}
