use crate::models::matches::Match;
use crate::normalize::classify::Sport;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Fixtures,
    Results,
}

impl Tab {
    pub fn admits(&self, fixture: &Match) -> bool {
        match self {
            Tab::Fixtures => fixture.is_fixture,
            Tab::Results => !fixture.is_fixture,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchListing {
    pub sport: Sport,
    pub tab: Tab,
    pub fixtures_count: usize,
    pub results_count: usize,
    pub matches: Vec<Match>,
}

/// Display order for one sport and tab: soonest fixture first, most recent
/// result first. Matches sharing a kickoff keep their incoming order.
pub fn project(matches: Vec<Match>, sport: Sport, tab: Tab) -> MatchListing {
    let in_sport: Vec<Match> = matches
        .into_iter()
        .filter(|fixture| fixture.sport() == Some(sport))
        .collect();
    let fixtures_count = in_sport.iter().filter(|fixture| fixture.is_fixture).count();
    let results_count = in_sport.len() - fixtures_count;

    let mut selected: Vec<Match> = in_sport
        .into_iter()
        .filter(|fixture| tab.admits(fixture))
        .collect();
    match tab {
        Tab::Fixtures => selected.sort_by_key(|fixture| fixture.kickoff()),
        Tab::Results => selected.sort_by_key(|fixture| Reverse(fixture.kickoff())),
    }

    MatchListing {
        sport,
        tab,
        fixtures_count,
        results_count,
        matches: selected,
    }
}

#[derive(Deserialize)]
pub struct MatchListArgs {
    #[serde(default = "default_sport")]
    pub sport: Sport,
    #[serde(default)]
    pub tab: Tab,
}

fn default_sport() -> Sport {
    Sport::Football
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    fn fixture(match_id: i64, competition: &str, day: u32, time: Option<&str>, is_fixture: bool) -> Match {
        Match {
            match_id,
            competition: competition.to_owned(),
            home_team: format!("Home {match_id}"),
            away_team: format!("Away {match_id}"),
            home_score: None,
            away_score: None,
            venue: None,
            referee: None,
            match_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            match_time: time.map(str::to_owned),
            is_fixture,
            broadcasting: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn collection() -> Vec<Match> {
        vec![
            fixture(1, "Senior Football Championship", 20, Some("16:00"), true),
            fixture(2, "Senior Football Championship", 14, None, true),
            fixture(3, "Senior Hurling Championship", 14, Some("14:00"), true),
            fixture(4, "Senior Football Championship", 14, Some("11:30"), true),
            fixture(5, "Minor Football Championship", 1, None, true),
            fixture(6, "Senior Football Championship", 2, None, false),
            fixture(7, "Senior Football Championship", 9, Some("19:00"), false),
            fixture(8, "Ladies Football Senior Championship", 9, Some("13:00"), false),
        ]
    }

    fn ids(listing: &MatchListing) -> Vec<i64> {
        listing.matches.iter().map(|m| m.match_id).collect()
    }

    #[test]
    fn football_fixtures_soonest_first() {
        let listing = project(collection(), Sport::Football, Tab::Fixtures);
        assert_eq!(ids(&listing), vec![4, 2, 1]);
        assert_eq!(listing.fixtures_count, 3);
        assert_eq!(listing.results_count, 3);
        for pair in listing.matches.windows(2) {
            assert!(pair[0].kickoff() <= pair[1].kickoff());
        }
    }

    #[test]
    fn football_results_most_recent_first() {
        let listing = project(collection(), Sport::Football, Tab::Results);
        assert_eq!(ids(&listing), vec![7, 8, 6]);
        for pair in listing.matches.windows(2) {
            assert!(pair[0].kickoff() >= pair[1].kickoff());
        }
    }

    #[test]
    fn hurling_view_excludes_football_and_other_grades() {
        let listing = project(collection(), Sport::Hurling, Tab::Fixtures);
        assert_eq!(ids(&listing), vec![3]);
        assert_eq!(listing.results_count, 0);
    }

    #[test]
    fn equal_kickoffs_keep_incoming_order() {
        let matches = vec![
            fixture(10, "Senior Hurling Championship", 5, Some("15:00"), false),
            fixture(11, "Senior Hurling Championship", 5, Some("15:00"), false),
            fixture(12, "Senior Hurling Championship", 5, Some("15:00"), false),
        ];
        let listing = project(matches, Sport::Hurling, Tab::Results);
        assert_eq!(ids(&listing), vec![10, 11, 12]);
    }
}
