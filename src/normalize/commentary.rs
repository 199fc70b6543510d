use regex::Regex;
use std::sync::LazyLock;

/// "67 mins: Kilkenny 2-20 Galway 1-18", with optional stoppage "70+2 mins".
static COMMENTARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\+(\d+))?\s+mins:\s+(.+?)\s+(\d+-\d+)\s+(.+?)\s+(\d+-\d+)").unwrap()
});
static FULL_TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:full[- ]time|ft)\b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryLine {
    pub minute: i32,
    pub home_team: String,
    pub home_score: String,
    pub away_team: String,
    pub away_score: String,
    pub is_final: bool,
}

/// Pulls the minute and running score out of a live blog entry. Entries
/// without a "N mins:" score line (half-time chatter, previews) yield `None`.
pub fn parse_commentary(text: &str) -> Option<CommentaryLine> {
    let caps = COMMENTARY_PATTERN.captures(text)?;
    let base_minute: i32 = caps[1].parse().ok()?;
    let stoppage: i32 = match caps.get(2) {
        Some(extra) => extra.as_str().parse().ok()?,
        None => 0,
    };
    Some(CommentaryLine {
        minute: base_minute.checked_add(stoppage)?,
        home_team: caps[3].trim().to_owned(),
        home_score: caps[4].to_owned(),
        away_team: caps[5].trim().to_owned(),
        away_score: caps[6].to_owned(),
        is_final: FULL_TIME_PATTERN.is_match(text),
    })
}
