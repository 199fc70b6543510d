use sqlx::{Pool, Sqlite};

const CREATE_MATCHES: &str = "
CREATE TABLE IF NOT EXISTS matches (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    competition TEXT NOT NULL,
    home_team TEXT NOT NULL CHECK (home_team <> ''),
    away_team TEXT NOT NULL CHECK (away_team <> ''),
    home_score TEXT,
    away_score TEXT,
    venue TEXT,
    referee TEXT,
    match_date DATE NOT NULL,
    match_time TEXT,
    is_fixture BOOLEAN NOT NULL,
    broadcasting TEXT,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    UNIQUE (home_team, away_team, match_date)
);
";

const CREATE_LIVE_UPDATES: &str = "
CREATE TABLE IF NOT EXISTS live_updates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    match_id INTEGER NOT NULL REFERENCES matches (id),
    minute INTEGER NOT NULL CHECK (minute >= 0),
    home_score TEXT NOT NULL,
    away_score TEXT NOT NULL,
    update_text TEXT NOT NULL,
    is_final BOOLEAN NOT NULL,
    created_at TIMESTAMP NOT NULL
);
";

const CREATE_LIVE_UPDATES_INDEX: &str = "
CREATE INDEX IF NOT EXISTS live_updates_by_match ON live_updates (match_id, created_at, id);
";

const CREATE_SCRAPE_HISTORY: &str = "
CREATE TABLE IF NOT EXISTS scrape_history (
    run_id BLOB PRIMARY KEY NOT NULL,
    last_scrape_time TIMESTAMP NOT NULL,
    matches_stored INTEGER NOT NULL
);
";

const CREATE_SCRAPE_HISTORY_INDEX: &str = "
CREATE INDEX IF NOT EXISTS scrape_history_by_time ON scrape_history (last_scrape_time);
";

/// Creates any missing tables. Safe to run on every start.
pub async fn migrate(db: &Pool<Sqlite>) -> sqlx::Result<()> {
    for statement in [
        CREATE_MATCHES,
        CREATE_LIVE_UPDATES,
        CREATE_LIVE_UPDATES_INDEX,
        CREATE_SCRAPE_HISTORY,
        CREATE_SCRAPE_HISTORY_INDEX,
    ] {
        sqlx::query(statement).execute(db).await?;
    }
    Ok(())
}
