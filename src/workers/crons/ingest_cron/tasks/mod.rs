pub mod ingest_matches;
