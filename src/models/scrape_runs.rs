use crate::entities::scrape_runs::ScrapeRun as Entity;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRun {
    pub run_id: Uuid,
    pub last_scrape_time: DateTime<Utc>,
    pub matches_stored: i64,
}

impl ScrapeRun {
    /// Whether a pass `interval` after this one is due at `now`.
    pub fn is_older_than(&self, interval: Duration, now: DateTime<Utc>) -> bool {
        let interval = TimeDelta::from_std(interval).unwrap_or(TimeDelta::MAX);
        match self.last_scrape_time.checked_add_signed(interval) {
            Some(next_due) => next_due <= now,
            None => false,
        }
    }
}

impl From<Entity> for ScrapeRun {
    fn from(value: Entity) -> Self {
        Self {
            run_id: value.run_id,
            last_scrape_time: value.last_scrape_time,
            matches_stored: value.matches_stored,
        }
    }
}

/// A first run is always due.
pub fn is_due(last_run: Option<&ScrapeRun>, interval: Duration, now: DateTime<Utc>) -> bool {
    last_run.is_none_or(|run| run.is_older_than(interval, now))
}

#[derive(Serialize)]
pub struct LastScrapeResponse {
    pub last_run: Option<ScrapeRun>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at(last_scrape_time: DateTime<Utc>) -> ScrapeRun {
        ScrapeRun {
            run_id: Uuid::new_v4(),
            last_scrape_time,
            matches_stored: 12,
        }
    }

    #[test]
    fn first_run_is_due() {
        assert!(is_due(None, Duration::from_secs(3600), Utc::now()));
    }

    #[test]
    fn due_once_interval_has_elapsed() {
        let now = Utc::now();
        let hour = Duration::from_secs(3600);
        assert!(!is_due(Some(&run_at(now - TimeDelta::minutes(59))), hour, now));
        assert!(is_due(Some(&run_at(now - TimeDelta::minutes(60))), hour, now));
        assert!(is_due(Some(&run_at(now - TimeDelta::days(2))), hour, now));
    }
}
