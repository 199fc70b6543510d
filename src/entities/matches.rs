use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, sqlx::FromRow)]
pub struct Match {
    pub id: i64,
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
