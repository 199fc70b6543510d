#![allow(dead_code)]

use chrono::NaiveDate;
use gaatoday_service::common::init;
use gaatoday_service::common::state::AppState;
use gaatoday_service::models::matches::MatchObservation;
use gaatoday_service::models::sources::RawMatch;
use gaatoday_service::repositories::schema;
use std::time::Duration;

/// Fresh in-memory store. A single connection keeps every query on the same
/// database.
pub async fn state() -> AppState {
    let db = init::initialize_db("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    schema::migrate(&db).await.unwrap();
    AppState {
        db,
        live_poll_interval: Duration::from_secs(30),
    }
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

pub fn observation(competition: &str, home_team: &str, away_team: &str, match_date: NaiveDate) -> MatchObservation {
    MatchObservation {
        competition: competition.to_owned(),
        home_team: home_team.to_owned(),
        away_team: away_team.to_owned(),
        home_score: None,
        away_score: None,
        venue: Some("Croke Park".to_owned()),
        referee: None,
        match_date,
        match_time: None,
        is_fixture: true,
        broadcasting: None,
    }
}

pub fn raw_match(competition: &str, home_team: &str, away_team: &str, date_text: &str) -> RawMatch {
    RawMatch {
        competition: competition.to_owned(),
        home_team: home_team.to_owned(),
        away_team: away_team.to_owned(),
        date_text: date_text.to_owned(),
        time_text: None,
        venue: None,
        referee: None,
        score_text: None,
        broadcast: None,
        is_fixture: true,
    }
}
