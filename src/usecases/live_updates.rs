use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::live_updates::CreateLiveUpdateArgs;
use crate::models::live_updates::{LiveMatch, LiveUpdate, LiveView};
use crate::models::matches::{Match, MatchIdentity};
use crate::models::sources::RawCommentary;
use crate::normalize::commentary::{CommentaryLine, parse_commentary};
use crate::repositories::live_updates;
use crate::usecases::matches;
use chrono::{DateTime, NaiveDate, Utc};

pub async fn fetch_log<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<Vec<LiveUpdate>> {
    match live_updates::fetch_by_match(ctx, match_id).await {
        Ok(log) => Ok(log.into_iter().map(LiveUpdate::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_since<C: Context>(
    ctx: &C,
    match_id: i64,
    since: DateTime<Utc>,
) -> ServiceResult<Vec<LiveUpdate>> {
    match live_updates::fetch_since(ctx, match_id, since).await {
        Ok(log) => Ok(log.into_iter().map(LiveUpdate::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_view<C: Context>(ctx: &C, fixture: &Match) -> ServiceResult<LiveView> {
    let log = fetch_log(ctx, fixture.match_id).await?;
    Ok(LiveView::aggregate(fixture.match_time.as_deref(), &log))
}

/// Every match on `match_date`, earliest throw-in first, with its current view.
pub async fn fetch_live_board<C: Context>(
    ctx: &C,
    match_date: NaiveDate,
) -> ServiceResult<Vec<LiveMatch>> {
    let fixtures = matches::fetch_by_date(ctx, match_date).await?;
    let mut board = Vec::with_capacity(fixtures.len());
    for details in fixtures {
        let live = fetch_view(ctx, &details).await?;
        board.push(LiveMatch { details, live });
    }
    Ok(board)
}

pub async fn record<C: Context>(
    ctx: &C,
    match_id: i64,
    line: CommentaryLine,
    update_text: &str,
) -> ServiceResult<LiveUpdate> {
    let args = CreateLiveUpdateArgs {
        match_id,
        minute: line.minute,
        home_score: line.home_score,
        away_score: line.away_score,
        update_text: update_text.to_owned(),
        is_final: line.is_final,
    };
    match live_updates::create(ctx, args).await {
        Ok(update) => Ok(LiveUpdate::from(update)),
        Err(e) => unexpected(e),
    }
}

/// Attaches one commentary entry to the match it describes.
///
/// Nothing is written once the match has a final entry, when the minute goes
/// backwards, or when the same minute and score were already recorded.
pub async fn record_commentary<C: Context>(
    ctx: &C,
    entry: &RawCommentary,
    today: NaiveDate,
) -> ServiceResult<LiveUpdate> {
    let line = parse_commentary(&entry.text).ok_or(AppError::LiveUpdatesUnrecognisedText)?;
    let identity = MatchIdentity {
        home_team: line.home_team.clone(),
        away_team: line.away_team.clone(),
        match_date: entry.match_date.unwrap_or(today),
    };
    let fixture = matches::fetch_by_identity(ctx, &identity)
        .await?
        .ok_or(AppError::LiveUpdatesMatchNotFound)?;

    let latest = match live_updates::fetch_latest(ctx, fixture.match_id).await {
        Ok(latest) => latest,
        Err(e) => return unexpected(e),
    };
    if let Some(latest) = latest {
        if latest.is_final {
            return Err(AppError::LiveUpdatesMatchFinished);
        }
        if line.minute < latest.minute {
            return Err(AppError::LiveUpdatesOutOfOrder);
        }
    }

    let is_recorded = live_updates::exists(
        ctx,
        fixture.match_id,
        line.minute,
        &line.home_score,
        &line.away_score,
    )
    .await?;
    if is_recorded {
        return Err(AppError::LiveUpdatesDuplicate);
    }

    record(ctx, fixture.match_id, line, entry.text.trim()).await
}
