pub mod ingestion;
pub mod listings;
pub mod live_updates;
pub mod matches;
pub mod scrape_runs;
pub mod sources;
