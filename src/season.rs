//! Season bounds resolution and default date ranges
//!
//! The list filter and slot generator both default their date range to the
//! league's configured season. The season identifier is a free-form string
//! (`"2026"`, `"Spring 2026"`, `"2026-fall"`); a 4-digit year is extracted
//! from it and mapped onto the spring or fall playing window. When nothing
//! is resolvable, a fixed fallback window for the current year applies.

use chrono::{Datelike, NaiveDate};

use crate::constants::season as season_consts;
use crate::models::LeagueInfo;

/// Extracts a 4-digit year token from a season identifier.
fn parse_season_year(season: &str) -> Option<i32> {
    season
        .split(|c: char| !c.is_ascii_digit())
        .find(|token| token.len() == 4)
        .and_then(|token| token.parse::<i32>().ok())
        .filter(|year| (1900..=2200).contains(year))
}

fn spring_window(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, season_consts::SPRING_START_MONTH, 1)?,
        NaiveDate::from_ymd_opt(
            year,
            season_consts::SPRING_END_MONTH,
            season_consts::SPRING_END_DAY,
        )?,
    ))
}

fn fall_window(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, season_consts::FALL_START_MONTH, 1)?,
        NaiveDate::from_ymd_opt(
            year,
            season_consts::FALL_END_MONTH,
            season_consts::FALL_END_DAY,
        )?,
    ))
}

/// Resolves a season identifier into date bounds. Identifiers mentioning
/// `fall` map to the fall window, everything else to spring. `None` when no
/// year can be extracted.
pub fn season_bounds(season: &str) -> Option<(NaiveDate, NaiveDate)> {
    let year = parse_season_year(season)?;
    if season.to_lowercase().contains("fall") {
        fall_window(year)
    } else {
        spring_window(year)
    }
}

/// Fixed fallback range used when no season data is resolvable: the spring
/// window of the reference year.
pub fn fallback_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    spring_window(today.year()).expect("spring window dates are always valid")
}

/// The default date range for filters and the generator: season bounds when
/// available, the fallback window otherwise. Callers apply this only to
/// fields the user has not already filled in.
pub fn default_range(league: Option<&LeagueInfo>, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    league
        .and_then(|l| l.season.as_deref())
        .and_then(season_bounds)
        .unwrap_or_else(|| fallback_range(today))
}
