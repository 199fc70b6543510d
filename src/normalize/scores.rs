use regex::Regex;
use std::sync::LazyLock;

/// Goals-points, e.g. "2-20".
static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+-\d+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub home_score: String,
    pub away_score: String,
}

/// Splits "2-20 - 1-18" (or "2-20 1-18") into home and away scores.
pub fn parse_score_line(text: &str) -> Option<ScoreLine> {
    let mut scores = SCORE_PATTERN.find_iter(text).map(|m| m.as_str().to_owned());
    let home_score = scores.next()?;
    let away_score = scores.next()?;
    Some(ScoreLine {
        home_score,
        away_score,
    })
}
