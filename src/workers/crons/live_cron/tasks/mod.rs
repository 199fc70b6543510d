pub mod ingest_commentary;
