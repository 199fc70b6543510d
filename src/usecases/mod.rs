pub mod ingestion;
pub mod live_updates;
pub mod matches;
pub mod scrape_runs;
