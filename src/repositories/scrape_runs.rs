use crate::common::context::Context;
use crate::entities::scrape_runs::ScrapeRun;
use chrono::Utc;
use uuid::Uuid;

const TABLE_NAME: &str = "scrape_history";

pub async fn create<C: Context>(ctx: &C, run_id: Uuid, matches_stored: i64) -> sqlx::Result<ScrapeRun> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (run_id, last_scrape_time, matches_stored) VALUES (?, ?, ?)"
    );
    let scrape_run = ScrapeRun {
        run_id,
        last_scrape_time: Utc::now(),
        matches_stored,
    };
    sqlx::query(QUERY)
        .bind(scrape_run.run_id)
        .bind(scrape_run.last_scrape_time)
        .bind(scrape_run.matches_stored)
        .execute(ctx.db())
        .await?;
    Ok(scrape_run)
}

pub async fn fetch_latest<C: Context>(ctx: &C) -> sqlx::Result<Option<ScrapeRun>> {
    const QUERY: &str = const_str::concat!(
        "SELECT run_id, last_scrape_time, matches_stored FROM ",
        TABLE_NAME,
        " ORDER BY last_scrape_time DESC, rowid DESC LIMIT 1"
    );
    sqlx::query_as(QUERY).fetch_optional(ctx.db()).await
}
