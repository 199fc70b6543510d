use crate::adapters::sources::LiveCommentarySource;
use crate::common::error::ServiceResult;
use crate::models::ingestion::CommentaryReport;
use crate::usecases::ingestion;
use crate::workers::crons::live_cron::LiveJob;
use chrono::Local;

pub async fn ingest_commentary(job: &LiveJob) -> ServiceResult<CommentaryReport> {
    let entries = job.source.fetch_commentary().await?;
    let today = Local::now().date_naive();
    Ok(ingestion::ingest_commentary(job, &entries, today).await)
}
