use crate::common::error::AppError;
use crate::models::matches::Match;

/// A raw record that could not be turned into a stored match.
#[derive(Debug)]
pub struct IngestFailure {
    /// Position of the record in the pass.
    pub position: usize,
    pub home_team: String,
    pub away_team: String,
    pub error: AppError,
}

/// Outcome of one ingestion pass over the raw match source.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub stored: Vec<Match>,
    pub failures: Vec<IngestFailure>,
    /// Stored records whose date had to be defaulted.
    pub approximated: usize,
}

impl IngestReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommentaryReport {
    pub recorded: usize,
    pub skipped: usize,
}
