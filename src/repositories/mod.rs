pub mod live_updates;
pub mod matches;
pub mod schema;
pub mod scrape_runs;
