use chrono::{DateTime, Utc};

#[derive(Debug, sqlx::FromRow)]
pub struct LiveUpdate {
    pub id: i64,
    pub match_id: i64,
    pub minute: i32,
    pub home_score: String,
    pub away_score: String,
    pub update_text: String,
    pub is_final: bool,
    pub created_at: DateTime<Utc>,
}

pub struct CreateLiveUpdateArgs {
    pub match_id: i64,
    pub minute: i32,
    pub home_score: String,
    pub away_score: String,
    pub update_text: String,
    pub is_final: bool,
}
