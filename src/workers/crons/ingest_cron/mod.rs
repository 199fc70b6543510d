pub mod tasks;

use crate::adapters::sources::FeedLocation;
use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::cron_tasks;
use crate::settings::AppSettings;
use sqlx::{Pool, Sqlite};
use std::time::Duration;
use tasks::ingest_matches::ingest_matches;

/// Everything one ingestion pass needs, handed in by the entry point.
pub struct IngestJob {
    pub state: AppState,
    pub source: FeedLocation,
    pub season_year: i32,
    pub interval: Duration,
}

impl Context for IngestJob {
    fn db(&self) -> &Pool<Sqlite> {
        &self.state.db
    }
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let job = IngestJob {
        state: init::initialize_state(settings).await?,
        source: FeedLocation::parse(&settings.raw_match_source),
        season_year: settings.season_year,
        interval: settings.ingest_interval,
    };
    cron_tasks! {
        &job,
        ingest_matches,
    }
    Ok(())
}
