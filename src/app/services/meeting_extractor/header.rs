//! Meeting header parsing
//!
//! Extracts the meeting number and ISO date from the line window around the
//! first meeting marker. Date conversion is locale-specific: the month table
//! lives in [`crate::constants`] and both the "21 de Noviembre de 2025" and
//! the "21 NOVIEMBRE 2025" spellings are supported; dialects pick which
//! conversion(s) to apply.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::normalize_int;
use crate::app::services::dialects::Dialect;
use crate::constants::month_number;

static DATE_WITH_DE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s+de\s+(\w+)\s+de\s+(\d{4})").unwrap());

static DATE_WITHOUT_DE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s+(\w+)\s+(\d{4})").unwrap());

/// Header fields of one meeting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingHeader {
    /// Meeting number, digits only; empty when not found
    pub nro_reunion: String,

    /// ISO-8601 date; empty when no date text was recognized
    pub fecha: String,
}

/// Parse the meeting header from a line window
///
/// The window is generous on both sides of the marker to tolerate arbitrary
/// preamble. Both fields fail closed to empty strings.
pub fn parse_meeting_header(window: &[String], dialect: &Dialect) -> MeetingHeader {
    let text = window.join("\n");

    let fecha = dialect
        .date_re
        .find(&text)
        .and_then(|m| (dialect.date_to_iso)(m.as_str()))
        .unwrap_or_default();

    let nro_reunion = dialect
        .reunion_re
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| normalize_int(m.as_str()))
        .unwrap_or_default();

    MeetingHeader { nro_reunion, fecha }
}

/// Convert "21 de Noviembre de 2025"-style date text to ISO-8601
///
/// Returns `None` for unknown month names or impossible dates; the date is
/// never guessed.
pub fn date_with_de_to_iso(text: &str) -> Option<String> {
    DATE_WITH_DE_RE
        .captures(text)
        .and_then(|caps| compose_iso(&caps[1], &caps[2], &caps[3]))
}

/// Convert "21 NOVIEMBRE 2025"-style date text to ISO-8601
pub fn date_without_de_to_iso(text: &str) -> Option<String> {
    DATE_WITHOUT_DE_RE
        .captures(text)
        .and_then(|caps| compose_iso(&caps[1], &caps[2], &caps[3]))
}

fn compose_iso(day: &str, month_name: &str, year: &str) -> Option<String> {
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let month = month_number(month_name)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
