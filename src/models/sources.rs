use chrono::NaiveDate;
use serde::Deserialize;

/// Field set supplied by the raw match source for every scraped row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMatch {
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub date_text: String,
    #[serde(default)]
    pub time_text: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub referee: Option<String>,
    #[serde(default)]
    pub score_text: Option<String>,
    #[serde(default)]
    pub broadcast: Option<String>,
    pub is_fixture: bool,
}

/// One live blog entry. Entries without a date belong to today's matches.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommentary {
    pub text: String,
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
}
