//! Pure parsers turning scraped free text into structured values.
//!
//! None of these functions fail: text that cannot be understood yields a
//! [`ParseOutcome::Fallback`] carrying a documented default, so callers can
//! tell a confident parse from an approximation without error plumbing.

pub mod classify;
pub mod commentary;
pub mod dates;
pub mod matches;
pub mod scores;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> ParseOutcome<T> {
    pub fn value(self) -> T {
        match self {
            ParseOutcome::Parsed(value) | ParseOutcome::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseOutcome::Fallback(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Parsed(value) => ParseOutcome::Parsed(f(value)),
            ParseOutcome::Fallback(value) => ParseOutcome::Fallback(f(value)),
        }
    }
}
