use crate::api::RequestContext;
use crate::common::axum_extract::{ApiPath, ApiQuery};
use crate::common::error::ServiceResponse;
use crate::models::live_updates::{
    LiveBoardArgs, LiveBoardResponse, LiveUpdatesArgs, LiveUpdatesResponse, LiveView,
};
use crate::usecases::{live_updates, matches};
use axum::Json;
use chrono::Local;

pub async fn board(
    ctx: RequestContext,
    ApiQuery(args): ApiQuery<LiveBoardArgs>,
) -> ServiceResponse<LiveBoardResponse> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let board = live_updates::fetch_live_board(&ctx, date).await?;
    Ok(Json(LiveBoardResponse {
        date,
        matches: board,
        poll_interval_secs: ctx.live_poll_interval.as_secs(),
    }))
}

/// Live log of one match. With `since`, only entries created after it are
/// returned; the aggregated view always reflects the whole log.
pub async fn updates(
    ctx: RequestContext,
    ApiPath(match_id): ApiPath<i64>,
    ApiQuery(args): ApiQuery<LiveUpdatesArgs>,
) -> ServiceResponse<LiveUpdatesResponse> {
    let fixture = matches::fetch_one(&ctx, match_id).await?;
    let log = live_updates::fetch_log(&ctx, match_id).await?;
    let live = LiveView::aggregate(fixture.match_time.as_deref(), &log);
    let updates = match args.since {
        Some(since) => live_updates::fetch_since(&ctx, match_id, since).await?,
        None => log,
    };
    Ok(Json(LiveUpdatesResponse {
        match_id,
        live,
        updates,
        poll_interval_secs: ctx.live_poll_interval.as_secs(),
    }))
}
