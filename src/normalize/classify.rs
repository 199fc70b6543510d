use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    /// Hurling and camogie.
    Hurling,
    /// Senior grades of Gaelic and ladies football only.
    Football,
}

impl Sport {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sport::Hurling => "hurling",
            Sport::Football => "football",
        }
    }
}

const HURLING_TERMS: &[&str] = &["hurling", "camán", "iomaint", "camogie"];
const FOOTBALL_TERMS: &[&str] = &["football", "peil", "ladies football", "gaelic football"];
const SENIOR_TERM: &str = "senior";

pub struct ClassificationRule {
    pub sport: Sport,
    /// Receives the lowercased competition label.
    pub matches: fn(&str) -> bool,
}

/// Evaluated in order, first match wins. A hurling label naming a senior
/// grade therefore never reaches the football rule.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        sport: Sport::Hurling,
        matches: names_hurling,
    },
    ClassificationRule {
        sport: Sport::Football,
        matches: names_senior_football,
    },
];

fn contains_any(label: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| label.contains(term))
}

fn names_hurling(label: &str) -> bool {
    contains_any(label, HURLING_TERMS)
}

fn names_senior_football(label: &str) -> bool {
    label.contains(SENIOR_TERM) && contains_any(label, FOOTBALL_TERMS)
}

/// Sport view a competition belongs to, if any. Football grades below senior
/// belong to no view.
pub fn classify(competition: &str) -> Option<Sport> {
    let label = competition.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.matches)(&label))
        .map(|rule| rule.sport)
}

pub fn is_hurling(competition: &str) -> bool {
    classify(competition) == Some(Sport::Hurling)
}

pub fn is_football(competition: &str) -> bool {
    classify(competition) == Some(Sport::Football)
}
