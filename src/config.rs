use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "data/leaderboard.db";

#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite file holding the `scores` table.
    pub database_path: PathBuf,
}

impl Config {
    /// Reads `DATABASE_PATH` from the environment or a `.env` file.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let database_path = dotenv::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        Self { database_path }
    }
}
