use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct ScrapeRun {
    pub run_id: Uuid,
    pub last_scrape_time: DateTime<Utc>,
    pub matches_stored: i64,
}
