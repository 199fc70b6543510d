use crate::common::context::Context;
use crate::entities::live_updates::{CreateLiveUpdateArgs, LiveUpdate};
use chrono::{DateTime, Utc};

const TABLE_NAME: &str = "live_updates";
const READ_FIELDS: &str = const_str::concat!(
    "id, match_id, minute, home_score, away_score, update_text, is_final, created_at"
);

pub async fn create<C: Context>(ctx: &C, args: CreateLiveUpdateArgs) -> sqlx::Result<LiveUpdate> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (match_id, minute, home_score, away_score, update_text, is_final, created_at) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let created_at = Utc::now();
    let query_result = sqlx::query(QUERY)
        .bind(args.match_id)
        .bind(args.minute)
        .bind(&args.home_score)
        .bind(&args.away_score)
        .bind(&args.update_text)
        .bind(args.is_final)
        .bind(created_at)
        .execute(ctx.db())
        .await?;
    Ok(LiveUpdate {
        id: query_result.last_insert_rowid(),
        match_id: args.match_id,
        minute: args.minute,
        home_score: args.home_score,
        away_score: args.away_score,
        update_text: args.update_text,
        is_final: args.is_final,
        created_at,
    })
}

/// The full log of a match, oldest first.
pub async fn fetch_by_match<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Vec<LiveUpdate>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE match_id = ? ORDER BY created_at ASC, id ASC"
    );
    sqlx::query_as(QUERY).bind(match_id).fetch_all(ctx.db()).await
}

/// Entries created strictly after `since`, oldest first.
pub async fn fetch_since<C: Context>(
    ctx: &C,
    match_id: i64,
    since: DateTime<Utc>,
) -> sqlx::Result<Vec<LiveUpdate>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE match_id = ? AND created_at > ? ORDER BY created_at ASC, id ASC"
    );
    sqlx::query_as(QUERY)
        .bind(match_id)
        .bind(since)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_latest<C: Context>(ctx: &C, match_id: i64) -> sqlx::Result<Option<LiveUpdate>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE match_id = ? ORDER BY created_at DESC, id DESC LIMIT 1"
    );
    sqlx::query_as(QUERY)
        .bind(match_id)
        .fetch_optional(ctx.db())
        .await
}

pub async fn exists<C: Context>(
    ctx: &C,
    match_id: i64,
    minute: i32,
    home_score: &str,
    away_score: &str,
) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT EXISTS(",
        "SELECT 1 FROM ",
        TABLE_NAME,
        " WHERE match_id = ? AND minute = ? AND home_score = ? AND away_score = ?",
        ") AS is_recorded"
    );
    let result: (bool,) = sqlx::query_as(QUERY)
        .bind(match_id)
        .bind(minute)
        .bind(home_score)
        .bind(away_score)
        .fetch_one(ctx.db())
        .await?;
    Ok(result.0)
}
