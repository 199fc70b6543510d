use crate::adapters::sources::RawMatchSource;
use crate::common::error::ServiceResult;
use crate::usecases::{ingestion, scrape_runs};
use crate::workers::crons::ingest_cron::IngestJob;
use chrono::Local;
use tracing::{info, warn};

#[derive(Debug, PartialEq, Eq)]
pub enum IngestOutcome {
    NotDue,
    Completed { stored: usize, approximated: usize },
    Incomplete { stored: usize, failed: usize },
}

pub async fn ingest_matches(job: &IngestJob) -> ServiceResult<IngestOutcome> {
    if !scrape_runs::is_due(job, job.interval).await? {
        info!("Last scrape is recent enough, skipping pass");
        return Ok(IngestOutcome::NotDue);
    }

    let raw_matches = job.source.fetch_matches().await?;
    let today = Local::now().date_naive();
    let report = ingestion::ingest_matches(job, &raw_matches, job.season_year, today).await;

    let stored = report.stored.len();
    if !report.is_complete() {
        warn!(
            stored,
            failed = report.failures.len(),
            "Scrape pass left records behind, not recording it",
        );
        return Ok(IngestOutcome::Incomplete {
            stored,
            failed: report.failures.len(),
        });
    }

    let run = scrape_runs::record_run(job, stored as i64).await?;
    info!(run_id = run.run_id.to_string(), stored, "Recorded scrape run");
    Ok(IngestOutcome::Completed {
        stored,
        approximated: report.approximated,
    })
}
