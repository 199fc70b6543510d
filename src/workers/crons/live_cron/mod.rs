pub mod tasks;

use crate::adapters::sources::FeedLocation;
use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::cron_tasks;
use crate::settings::AppSettings;
use anyhow::anyhow;
use sqlx::{Pool, Sqlite};
use tasks::ingest_commentary::ingest_commentary;

pub struct LiveJob {
    pub state: AppState,
    pub source: FeedLocation,
}

impl Context for LiveJob {
    fn db(&self) -> &Pool<Sqlite> {
        &self.state.db
    }
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let source = settings
        .live_commentary_source
        .as_deref()
        .ok_or_else(|| anyhow!("LIVE_COMMENTARY_SOURCE is required for the live cron"))?;
    let job = LiveJob {
        state: init::initialize_state(settings).await?,
        source: FeedLocation::parse(source),
    };
    cron_tasks! {
        &job,
        ingest_commentary,
    }
    Ok(())
}
