pub mod ingest_cron;
pub mod live_cron;
pub mod tasks;
