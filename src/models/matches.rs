use crate::entities::matches::Match as Entity;
use crate::normalize::classify::{Sport, classify};
use crate::normalize::dates::kickoff_at;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// Two observations describe the same match exactly when these agree.
/// Team names are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchIdentity {
    pub home_team: String,
    pub away_team: String,
    pub match_date: NaiveDate,
}

/// One normalized sighting of a match, as produced by a scrape pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchObservation {
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub match_date: NaiveDate,
    pub match_time: Option<String>,
    pub is_fixture: bool,
    pub broadcasting: Option<String>,
}

impl MatchObservation {
    pub fn identity(&self) -> MatchIdentity {
        MatchIdentity {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            match_date: self.match_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub match_id: i64,
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub match_date: NaiveDate,
    pub match_time: Option<String>,
    pub is_fixture: bool,
    pub broadcasting: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    pub fn identity(&self) -> MatchIdentity {
        MatchIdentity {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            match_date: self.match_date,
        }
    }

    pub fn sport(&self) -> Option<Sport> {
        classify(&self.competition)
    }

    /// Scheduled throw-in, midday when no usable time was scraped.
    pub fn kickoff(&self) -> NaiveDateTime {
        kickoff_at(self.match_date, self.match_time.as_deref())
    }
}

impl From<Entity> for Match {
    fn from(value: Entity) -> Self {
        Self {
            match_id: value.id,
            competition: value.competition,
            home_team: value.home_team,
            away_team: value.away_team,
            home_score: value.home_score,
            away_score: value.away_score,
            venue: value.venue,
            referee: value.referee,
            match_date: value.match_date,
            match_time: value.match_time,
            is_fixture: value.is_fixture,
            broadcasting: value.broadcasting,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
