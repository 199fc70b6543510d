use crate::entities::live_updates::LiveUpdate as Entity;
use crate::models::matches::Match;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a throw-in time that has not been announced.
pub const TIME_TO_BE_DETERMINED: &str = "TBD";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveUpdate {
    pub update_id: i64,
    pub match_id: i64,
    pub minute: i32,
    pub home_score: String,
    pub away_score: String,
    pub update_text: String,
    pub is_final: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Entity> for LiveUpdate {
    fn from(value: Entity) -> Self {
        Self {
            update_id: value.id,
            match_id: value.match_id,
            minute: value.minute,
            home_score: value.home_score,
            away_score: value.away_score,
            update_text: value.update_text,
            is_final: value.is_final,
            created_at: value.created_at,
        }
    }
}

/// Current state of a match as derived from its live log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LiveView {
    Scheduled {
        match_time: String,
    },
    InPlay {
        minute: i32,
        home_score: String,
        away_score: String,
        commentary: String,
        is_final: bool,
    },
}

impl LiveView {
    /// Folds a log ordered oldest first. The newest entry always wins; an
    /// empty log falls back to the scheduled time.
    pub fn aggregate(match_time: Option<&str>, log: &[LiveUpdate]) -> Self {
        match log.last() {
            Some(latest) => LiveView::InPlay {
                minute: latest.minute,
                home_score: latest.home_score.clone(),
                away_score: latest.away_score.clone(),
                commentary: latest.update_text.clone(),
                is_final: latest.is_final,
            },
            None => LiveView::Scheduled {
                match_time: match_time.unwrap_or(TIME_TO_BE_DETERMINED).to_owned(),
            },
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, LiveView::InPlay { is_final: true, .. })
    }
}

#[derive(Debug, Serialize)]
pub struct LiveMatch {
    #[serde(rename = "match")]
    pub details: Match,
    pub live: LiveView,
}

#[derive(Deserialize)]
pub struct LiveBoardArgs {
    pub date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct LiveBoardResponse {
    pub date: NaiveDate,
    pub matches: Vec<LiveMatch>,
    pub poll_interval_secs: u64,
}

#[derive(Deserialize)]
pub struct LiveUpdatesArgs {
    pub since: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct LiveUpdatesResponse {
    pub match_id: i64,
    pub live: LiveView,
    pub updates: Vec<LiveUpdate>,
    pub poll_interval_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn entry(update_id: i64, minute: i32, home_score: &str, is_final: bool) -> LiveUpdate {
        LiveUpdate {
            update_id,
            match_id: 1,
            minute,
            home_score: home_score.to_owned(),
            away_score: "0-05".to_owned(),
            update_text: format!("{minute} mins"),
            is_final,
            created_at: DateTime::<Utc>::UNIX_EPOCH + TimeDelta::minutes(minute as i64),
        }
    }

    #[test]
    fn latest_entry_wins_and_marks_final() {
        let log = [
            entry(1, 10, "0-02", false),
            entry(2, 40, "0-07", false),
            entry(3, 70, "1-12", true),
        ];
        let view = LiveView::aggregate(Some("15:30"), &log);
        assert_eq!(
            view,
            LiveView::InPlay {
                minute: 70,
                home_score: "1-12".to_owned(),
                away_score: "0-05".to_owned(),
                commentary: "70 mins".to_owned(),
                is_final: true,
            }
        );
        assert!(view.is_final());
    }

    #[test]
    fn last_entry_wins_for_any_log_length() {
        let mut log = Vec::new();
        for minute in 0..30 {
            log.push(entry(minute as i64, minute, &format!("0-{minute:02}"), false));
            match LiveView::aggregate(None, &log) {
                LiveView::InPlay { home_score, .. } => {
                    assert_eq!(home_score, format!("0-{minute:02}"))
                }
                view => panic!("unexpected view {view:?}"),
            }
        }
    }

    #[test]
    fn empty_log_shows_schedule() {
        assert_eq!(
            LiveView::aggregate(Some("19:45"), &[]),
            LiveView::Scheduled {
                match_time: "19:45".to_owned()
            }
        );
        let unscheduled = LiveView::aggregate(None, &[]);
        assert_eq!(
            unscheduled,
            LiveView::Scheduled {
                match_time: TIME_TO_BE_DETERMINED.to_owned()
            }
        );
        assert!(!unscheduled.is_final());
    }
}
