//! Hipódromo Chile (HCH) dialect
//!
//! The reference dialect: its race-header shape ("HH:MM aprox. NNNN Mts.
//! (code) ...") and participant heuristics define the generic pipeline
//! behavior, and the other venues override only what differs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::app::models::{Participant, Venue};
use crate::app::services::meeting_extractor::header::date_with_de_to_iso;
use crate::app::services::meeting_extractor::participant::{
    is_all_digits, parse_chunk_columnar, parse_chunk_multiline,
};
use crate::app::services::meeting_extractor::race_block;
use crate::config::ExtractorOptions;
use crate::constants::WEEKDAYS_PATTERN;

/// "Viernes 21 de Noviembre de 2025"
pub(crate) static HCH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){WEEKDAYS_PATTERN}\s+\d{{1,2}}\s+de\s+\w+\s+de\s+\d{{4}}"
    ))
    .unwrap()
});

/// "REUNION N° 12" (both ordinal-indicator glyphs and a plain "o" occur)
pub(crate) static HCH_REUNION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)REUNION\s*N[º°o]\s*(\d+)").unwrap());

/// "14:30 aprox. 1200 Mts. (123.456) HANDICAP ..."
pub(crate) static HCH_RACE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<hora>\d{1,2}:\d{2})\s*aprox\.?\s*(?P<dist>[\d\.\s]+)\s*Mts\.?\s*\((?P<codigo>[\d\.,]+)\)\s*(?P<resto>.+)",
    )
    .unwrap()
});

/// "1 ALAZAN - Thunder ..." row start
static HCH_PARTICIPANT_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\s+.+\s+-\s+").unwrap());

impl Dialect {
    /// Hipódromo Chile
    pub fn hch() -> Self {
        Self {
            venue: Venue::Hch,
            date_re: &HCH_DATE_RE,
            reunion_re: &HCH_REUNION_RE,
            race_header_re: &HCH_RACE_HEADER_RE,
            boundary_lookback: 0,
            date_to_iso: date_with_de_to_iso,
            is_participant_start,
            parse_participant_chunk,
            parse_race_block: race_block::parse_race_block,
        }
    }
}

/// HCH participant-row start predicate
///
/// A bare 1-2 digit number is only a row start when it is plausible as a
/// saddle number and the next line carries a hyphen; this disambiguates a
/// wrapped row from stray numeric data.
fn is_participant_start(lines: &[String], idx: usize, options: &ExtractorOptions) -> bool {
    let Some(line) = lines.get(idx) else {
        return false;
    };
    let line = line.trim();

    if is_all_digits(line) {
        let number: u32 = match line.parse() {
            Ok(n) => n,
            Err(_) => return false,
        };
        if number > options.max_participant_number {
            return false;
        }
        return lines.get(idx + 1).is_some_and(|next| next.contains(" - "));
    }

    HCH_PARTICIPANT_START_RE.is_match(line)
}

/// HCH chunk parser: columnar heuristic first, multi-line fallback second
fn parse_participant_chunk(chunk: &[String]) -> Option<Participant> {
    parse_chunk_columnar(chunk).or_else(|| parse_chunk_multiline(chunk))
}
