use crate::normalize::ParseOutcome;
use chrono::{Month, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// "Sunday 15 June", "Sat, 2 Aug". The leading word is not interpreted.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+),?\s+(\d{1,2})\s+(\w+)").unwrap());
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").unwrap());

/// Month used when the month token is missing or unknown.
pub const FALLBACK_MONTH: Month = Month::June;

const MONTH_NAMES: [(&str, &str, Month); 12] = [
    ("january", "jan", Month::January),
    ("february", "feb", Month::February),
    ("march", "mar", Month::March),
    ("april", "apr", Month::April),
    ("may", "may", Month::May),
    ("june", "jun", Month::June),
    ("july", "jul", Month::July),
    ("august", "aug", Month::August),
    ("september", "sep", Month::September),
    ("october", "oct", Month::October),
    ("november", "nov", Month::November),
    ("december", "dec", Month::December),
];

pub fn default_kickoff_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn parse_month(token: &str) -> ParseOutcome<Month> {
    let token = token.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(full, short, _)| token == *full || token == *short)
        .map(|(_, _, month)| ParseOutcome::Parsed(*month))
        .unwrap_or(ParseOutcome::Fallback(FALLBACK_MONTH))
}

/// Absent, unmatched or impossible clock times fall back to midday.
pub fn parse_time(text: Option<&str>) -> ParseOutcome<NaiveTime> {
    let parsed = text
        .and_then(|text| TIME_PATTERN.captures(text))
        .and_then(|caps| {
            let hour = caps[1].parse().ok()?;
            let minute = caps[2].parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        });
    match parsed {
        Some(time) => ParseOutcome::Parsed(time),
        None => ParseOutcome::Fallback(default_kickoff_time()),
    }
}

/// Reads day and month from `text`, or `None` when the text holds no
/// recognisable day and month or names a day the month does not have.
fn resolve_date(text: &str, season_year: i32) -> Option<ParseOutcome<NaiveDate>> {
    let caps = DATE_PATTERN.captures(text)?;
    let day = caps[2].parse::<u32>().ok()?;
    let month = parse_month(&caps[3]);
    let date = NaiveDate::from_ymd_opt(season_year, month.value().number_from_month(), day)?;
    match month.is_fallback() {
        true => Some(ParseOutcome::Fallback(date)),
        false => Some(ParseOutcome::Parsed(date)),
    }
}

/// Resolves a scraped date within `season_year`.
///
/// Unreadable text falls back to `today`. An unknown month token keeps the
/// day but lands in [`FALLBACK_MONTH`], and is reported as a fallback too.
pub fn parse_match_date(text: &str, season_year: i32, today: NaiveDate) -> ParseOutcome<NaiveDate> {
    resolve_date(text, season_year).unwrap_or(ParseOutcome::Fallback(today))
}

/// Combines a scraped date and optional time into a kickoff moment.
///
/// An unreadable date yields `now` as a whole. A missing time is the normal
/// case for results and is not treated as a fallback; a time that is present
/// but unreadable is.
pub fn parse_kickoff(
    date_text: &str,
    time_text: Option<&str>,
    season_year: i32,
    now: NaiveDateTime,
) -> ParseOutcome<NaiveDateTime> {
    let Some(date) = resolve_date(date_text, season_year) else {
        return ParseOutcome::Fallback(now);
    };
    let time = parse_time(time_text);
    let kickoff = date.value().and_time(time.value());
    let time_defaulted = time_text.is_some() && time.is_fallback();
    match date.is_fallback() || time_defaulted {
        true => ParseOutcome::Fallback(kickoff),
        false => ParseOutcome::Parsed(kickoff),
    }
}

/// Kickoff of a stored match, used for display ordering.
pub fn kickoff_at(match_date: NaiveDate, match_time: Option<&str>) -> NaiveDateTime {
    match_date.and_time(parse_time(match_time).value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn weekday_day_month_without_time_defaults_to_midday() {
        let kickoff = parse_kickoff("Sunday 15 June", None, 2025, now());
        assert!(!kickoff.is_fallback());
        let kickoff = kickoff.value();
        assert_eq!(kickoff.day(), 15);
        assert_eq!(kickoff.month0(), 5);
        assert_eq!(kickoff.year(), 2025);
        assert_eq!((kickoff.hour(), kickoff.minute()), (12, 0));
    }

    #[test]
    fn explicit_time_is_used() {
        let kickoff = parse_kickoff("Sat 2 Aug", Some("19:45"), 2025, now()).value();
        assert_eq!(kickoff.month(), 8);
        assert_eq!((kickoff.hour(), kickoff.minute()), (19, 45));

        let kickoff = parse_kickoff("Sat 2 Aug", Some("Throw-in 3:30"), 2025, now()).value();
        assert_eq!((kickoff.hour(), kickoff.minute()), (3, 30));
    }

    #[test]
    fn month_tokens_are_case_insensitive_names_or_abbreviations() {
        assert_eq!(parse_month("JANUARY"), ParseOutcome::Parsed(Month::January));
        assert_eq!(parse_month("Sep"), ParseOutcome::Parsed(Month::September));
        assert_eq!(parse_month("dec"), ParseOutcome::Parsed(Month::December));
        assert_eq!(parse_month("Sept"), ParseOutcome::Fallback(Month::June));
        assert_eq!(parse_month(""), ParseOutcome::Fallback(Month::June));
    }

    #[test]
    fn unknown_month_lands_in_june() {
        let today = now().date();
        let date = parse_match_date("Sunday 15 Juin", 2025, today);
        assert_eq!(date, ParseOutcome::Fallback(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
    }

    #[test]
    fn comma_after_weekday_is_tolerated() {
        let date = parse_match_date("Saturday, 12 July", 2025, now().date());
        assert_eq!(date, ParseOutcome::Parsed(NaiveDate::from_ymd_opt(2025, 7, 12).unwrap()));
    }

    #[test]
    fn unreadable_dates_fall_back_to_now() {
        assert_eq!(parse_kickoff("TBC", Some("15:00"), 2025, now()), ParseOutcome::Fallback(now()));
        assert_eq!(parse_kickoff("", None, 2025, now()), ParseOutcome::Fallback(now()));
        assert_eq!(
            parse_match_date("Monday 31 June", 2025, now().date()),
            ParseOutcome::Fallback(now().date())
        );
        assert_eq!(parse_kickoff("Monday 31 June", None, 2025, now()), ParseOutcome::Fallback(now()));
    }

    #[test]
    fn bad_clock_times_default_to_midday() {
        assert_eq!(parse_time(Some("25:00")), ParseOutcome::Fallback(default_kickoff_time()));
        assert_eq!(parse_time(Some("TBC")), ParseOutcome::Fallback(default_kickoff_time()));
        assert_eq!(parse_time(None), ParseOutcome::Fallback(default_kickoff_time()));
        assert!(parse_kickoff("Sun 15 June", Some("TBC"), 2025, now()).is_fallback());
    }
}
