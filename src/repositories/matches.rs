use crate::common::context::Context;
use crate::entities::matches::Match;
use crate::models::matches::{MatchIdentity, MatchObservation};
use chrono::{NaiveDate, Utc};

const TABLE_NAME: &str = "matches";
const READ_FIELDS: &str = const_str::concat!(
    "id, competition, home_team, away_team, home_score, away_score, ",
    "venue, referee, match_date, match_time, is_fixture, broadcasting, ",
    "created_at, updated_at"
);

/// Inserts the observation, or overwrites every scraped field of the row
/// sharing its identity. `created_at` of an existing row is kept.
pub async fn upsert<C: Context>(ctx: &C, observation: &MatchObservation) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (competition, home_team, away_team, home_score, away_score, venue, referee, ",
        "match_date, match_time, is_fixture, broadcasting, created_at, updated_at) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) ",
        "ON CONFLICT (home_team, away_team, match_date) DO UPDATE SET ",
        "competition = excluded.competition, ",
        "home_score = excluded.home_score, ",
        "away_score = excluded.away_score, ",
        "venue = excluded.venue, ",
        "referee = excluded.referee, ",
        "match_time = excluded.match_time, ",
        "is_fixture = excluded.is_fixture, ",
        "broadcasting = excluded.broadcasting, ",
        "updated_at = excluded.updated_at ",
        "RETURNING ",
        READ_FIELDS
    );
    let now = Utc::now();
    sqlx::query_as(QUERY)
        .bind(&observation.competition)
        .bind(&observation.home_team)
        .bind(&observation.away_team)
        .bind(&observation.home_score)
        .bind(&observation.away_score)
        .bind(&observation.venue)
        .bind(&observation.referee)
        .bind(observation.match_date)
        .bind(&observation.match_time)
        .bind(observation.is_fixture)
        .bind(&observation.broadcasting)
        .bind(now)
        .bind(now)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Match> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY).bind(match_id).fetch_one(ctx.db()).await
}

pub async fn fetch_by_identity<C: Context>(
    ctx: &C,
    identity: &MatchIdentity,
) -> sqlx::Result<Option<Match>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE home_team = ? AND away_team = ? AND match_date = ?"
    );
    sqlx::query_as(QUERY)
        .bind(&identity.home_team)
        .bind(&identity.away_team)
        .bind(identity.match_date)
        .fetch_optional(ctx.db())
        .await
}

/// Every stored match, earliest date first.
pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY match_date ASC, id ASC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

/// Matches on `match_date` in insertion order.
pub async fn fetch_by_date<C: Context>(ctx: &C, match_date: NaiveDate) -> sqlx::Result<Vec<Match>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE match_date = ? ORDER BY id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(match_date)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_count<C: Context>(ctx: &C) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!("SELECT COUNT(*) FROM ", TABLE_NAME);
    let count: (i64,) = sqlx::query_as(QUERY).fetch_one(ctx.db()).await?;
    Ok(count.0)
}
