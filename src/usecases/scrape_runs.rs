use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::scrape_runs::{self, ScrapeRun};
use crate::repositories::scrape_runs as repository;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

pub async fn record_run<C: Context>(ctx: &C, matches_stored: i64) -> ServiceResult<ScrapeRun> {
    let run_id = Uuid::new_v4();
    match repository::create(ctx, run_id, matches_stored).await {
        Ok(run) => Ok(ScrapeRun::from(run)),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_last<C: Context>(ctx: &C) -> ServiceResult<Option<ScrapeRun>> {
    match repository::fetch_latest(ctx).await {
        Ok(run) => Ok(run.map(ScrapeRun::from)),
        Err(e) => unexpected(e),
    }
}

pub async fn is_due<C: Context>(ctx: &C, interval: Duration) -> ServiceResult<bool> {
    let last_run = fetch_last(ctx).await?;
    Ok(scrape_runs::is_due(last_run.as_ref(), interval, Utc::now()))
}
