use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::listings::{MatchListing, Tab, project};
use crate::models::matches::{Match, MatchIdentity, MatchObservation};
use crate::normalize::classify::Sport;
use crate::repositories::matches;
use chrono::NaiveDate;
use tracing::warn;

/// Errors reported by the database itself, such as constraint violations,
/// become [`AppError::MatchesStoreRejected`]; pool and I/O failures stay
/// unexpected so callers can tell a bad record from an unreachable store.
pub async fn upsert<C: Context>(ctx: &C, observation: &MatchObservation) -> ServiceResult<Match> {
    match matches::upsert(ctx, observation).await {
        Ok(stored) => Ok(Match::from(stored)),
        Err(sqlx::Error::Database(e)) => {
            warn!(
                home_team = observation.home_team,
                away_team = observation.away_team,
                kind = ?e.kind(),
                "Store rejected match: {e}",
            );
            Err(AppError::MatchesStoreRejected)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_one<C: Context>(ctx: &C, match_id: i64) -> ServiceResult<Match> {
    match matches::fetch_one(ctx, match_id).await {
        Ok(stored) => Ok(Match::from(stored)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MatchesNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_by_identity<C: Context>(
    ctx: &C,
    identity: &MatchIdentity,
) -> ServiceResult<Option<Match>> {
    match matches::fetch_by_identity(ctx, identity).await {
        Ok(stored) => Ok(stored.map(Match::from)),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Match>> {
    match matches::fetch_all(ctx).await {
        Ok(stored) => Ok(stored.into_iter().map(Match::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Matches on `match_date`, earliest throw-in first. Clock times are
/// compared parsed, so "9:30" sorts before "19:45".
pub async fn fetch_by_date<C: Context>(ctx: &C, match_date: NaiveDate) -> ServiceResult<Vec<Match>> {
    match matches::fetch_by_date(ctx, match_date).await {
        Ok(stored) => {
            let mut fixtures: Vec<Match> = stored.into_iter().map(Match::from).collect();
            fixtures.sort_by_key(Match::kickoff);
            Ok(fixtures)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_count<C: Context>(ctx: &C) -> ServiceResult<i64> {
    match matches::fetch_count(ctx).await {
        Ok(count) => Ok(count),
        Err(e) => unexpected(e),
    }
}

/// Filtered and ordered view of every stored match for one sport and tab.
pub async fn fetch_listing<C: Context>(ctx: &C, sport: Sport, tab: Tab) -> ServiceResult<MatchListing> {
    let all = fetch_all(ctx).await?;
    Ok(project(all, sport, tab))
}
