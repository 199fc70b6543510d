use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::ingestion::{CommentaryReport, IngestFailure, IngestReport};
use crate::models::matches::Match;
use crate::models::sources::{RawCommentary, RawMatch};
use crate::normalize::matches::normalize_raw_match;
use crate::usecases::{live_updates, matches};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Normalizes and upserts every raw record in order. A record that fails is
/// collected in the report and the pass moves on.
pub async fn ingest_matches<C: Context>(
    ctx: &C,
    raw_matches: &[RawMatch],
    season_year: i32,
    today: NaiveDate,
) -> IngestReport {
    let mut report = IngestReport::default();
    for (position, raw) in raw_matches.iter().enumerate() {
        match ingest_match(ctx, raw, season_year, today).await {
            Ok((stored, approximated)) => {
                if approximated {
                    report.approximated += 1;
                }
                report.stored.push(stored);
            }
            Err(error) => {
                warn!(
                    position,
                    home_team = raw.home_team,
                    away_team = raw.away_team,
                    code = error.code(),
                    "Failed to ingest match",
                );
                report.failures.push(IngestFailure {
                    position,
                    home_team: raw.home_team.clone(),
                    away_team: raw.away_team.clone(),
                    error,
                });
            }
        }
    }
    report
}

async fn ingest_match<C: Context>(
    ctx: &C,
    raw: &RawMatch,
    season_year: i32,
    today: NaiveDate,
) -> ServiceResult<(Match, bool)> {
    let observation = normalize_raw_match(raw, season_year, today)?;
    let approximated = observation.is_fallback();
    if approximated {
        warn!(
            date_text = raw.date_text,
            home_team = raw.home_team,
            away_team = raw.away_team,
            "Unreadable match date, stored under a default date",
        );
    }
    let stored = matches::upsert(ctx, &observation.value()).await?;
    Ok((stored, approximated))
}

/// Records every commentary entry that moves a known match forward.
pub async fn ingest_commentary<C: Context>(
    ctx: &C,
    entries: &[RawCommentary],
    today: NaiveDate,
) -> CommentaryReport {
    let mut report = CommentaryReport::default();
    for entry in entries {
        match live_updates::record_commentary(ctx, entry, today).await {
            Ok(update) => {
                info!(
                    match_id = update.match_id,
                    minute = update.minute,
                    is_final = update.is_final,
                    "Recorded live update",
                );
                report.recorded += 1;
            }
            Err(e) => {
                info!(text = entry.text, "Skipped commentary entry: {}", e.code());
                report.skipped += 1;
            }
        }
    }
    report
}
