use crate::common::error::{AppError, ServiceResult};
use crate::models::matches::MatchObservation;
use crate::models::sources::RawMatch;
use crate::normalize::ParseOutcome;
use crate::normalize::dates::parse_match_date;
use crate::normalize::scores::parse_score_line;
use chrono::NaiveDate;

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Turns one scraped field set into a canonical observation.
///
/// The outcome is a fallback when the match date had to be defaulted, in
/// which case the identity of the resulting record is approximate. Team
/// names and the competition label are kept exactly as scraped.
pub fn normalize_raw_match(
    raw: &RawMatch,
    season_year: i32,
    today: NaiveDate,
) -> ServiceResult<ParseOutcome<MatchObservation>> {
    if raw.home_team.trim().is_empty() || raw.away_team.trim().is_empty() {
        return Err(AppError::MatchesMissingTeamName);
    }

    let score_line = raw.score_text.as_deref().and_then(parse_score_line);
    let (home_score, away_score) = match score_line {
        Some(line) => (Some(line.home_score), Some(line.away_score)),
        None => (None, None),
    };

    let match_date = parse_match_date(&raw.date_text, season_year, today);
    Ok(match_date.map(|match_date| MatchObservation {
        competition: raw.competition.clone(),
        home_team: raw.home_team.clone(),
        away_team: raw.away_team.clone(),
        home_score,
        away_score,
        venue: non_blank(raw.venue.as_deref()),
        referee: non_blank(raw.referee.as_deref()),
        match_date,
        match_time: non_blank(raw.time_text.as_deref()),
        is_fixture: raw.is_fixture,
        broadcasting: non_blank(raw.broadcast.as_deref()),
    }))
}
