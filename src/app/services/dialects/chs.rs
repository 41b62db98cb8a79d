//! Club Hípico de Santiago (CHS) dialect
//!
//! CHS programs split the race header across lines: "12:30 APROX." opens the
//! block and the race number, distance and condition follow on the next
//! line. The date drops the "de" connectors ("VIERNES 21 NOVIEMBRE 2025"),
//! the meeting number is labelled "RN", and participant rows carry the
//! weight at the end of the start line. This dialect therefore overrides the
//! race-block parsing entirely while reusing the shared segmentation and
//! chunk-gathering contract.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::app::models::{Participant, Race, Venue};
use crate::app::services::meeting_extractor::header::{
    date_with_de_to_iso, date_without_de_to_iso,
};
use crate::app::services::meeting_extractor::participant::gather_participant_chunks;
use crate::app::services::meeting_extractor::race_block::complete_option_list;
use crate::config::ExtractorOptions;
use crate::constants::{OPTION_NUMBER_COUNT, WEEKDAYS_PATTERN};

/// "VIERNES 21 NOVIEMBRE 2025" (no "de" connectors)
static CHS_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){WEEKDAYS_PATTERN}\s+\d{{1,2}}\s+\w+\s+\d{{4}}"
    ))
    .unwrap()
});

/// "RN 8" meeting-number label
static CHS_REUNION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)RN\s*(\d+)").unwrap());

/// "12:30 APROX." header line
static CHS_RACE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?P<hora>\d{1,2}:\d{2})\s*APROX\.").unwrap());

/// "1 1200VARIANTEMTS. PISTA 2 ARENA" details line
static CHS_RACE_DETAILS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?P<nro>\d+)\s+(?P<dist>\d+)(?P<resto>.+)").unwrap());

/// "3 SASSI - Constitution 57" row start, weight at the tail
static CHS_PARTICIPANT_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d{1,2})\s+(.+?)\s+-\s+(.+?)\s+(\d{2,3})").unwrap());

/// "OPC: 4-7-2-10" option list on the header line
static CHS_OPC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"OPC:\s*([\d\-\s]+)").unwrap());

/// Last parenthesized number group on the header line is the program code
static CHS_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([\d\.,]+)\)").unwrap());

/// "Pr. <name> (" prize-name clause
static CHS_PREMIO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Pr\.\s+(.+?)\s*\(").unwrap());

impl Dialect {
    /// Club Hípico de Santiago
    pub fn chs() -> Self {
        Self {
            venue: Venue::Chs,
            date_re: &CHS_DATE_RE,
            reunion_re: &CHS_REUNION_RE,
            race_header_re: &CHS_RACE_HEADER_RE,
            boundary_lookback: 0,
            date_to_iso,
            is_participant_start,
            parse_participant_chunk,
            parse_race_block,
        }
    }
}

/// CHS date conversion: parent (de-style) format first, then its own
fn date_to_iso(text: &str) -> Option<String> {
    date_with_de_to_iso(text).or_else(|| date_without_de_to_iso(text))
}

fn is_participant_start(lines: &[String], idx: usize, _options: &ExtractorOptions) -> bool {
    lines
        .get(idx)
        .is_some_and(|line| CHS_PARTICIPANT_START_RE.is_match(line))
}

/// CHS chunk parser
///
/// Number, name and weight come from the start line; jockey and trainer are
/// found on a following " - " line that does not open with a digit.
fn parse_participant_chunk(chunk: &[String]) -> Option<Participant> {
    let line0 = chunk.first()?.trim();
    let caps = CHS_PARTICIPANT_START_RE.captures(line0)?;

    let mut jinete = String::new();
    let mut preparador = String::new();
    for line in &chunk[1..] {
        let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit || !line.contains(" - ") {
            continue;
        }
        if let Some((j, p)) = line.split_once(" - ") {
            jinete = j.trim().to_string();
            preparador = p.trim().to_string();
            break;
        }
    }

    Some(Participant {
        numero: caps[1].to_string(),
        nombre: caps[2].trim().to_string(),
        jinete,
        peso: caps[4].to_string(),
        preparador,
        stud: String::new(),
    })
}

/// CHS race block parser
///
/// The block's first line must be the "HH:MM APROX." header; the details
/// line right below supplies distance and condition. The race number
/// printed there is ignored: numbering is reassigned after the card is
/// time-sorted.
fn parse_race_block(
    dialect: &Dialect,
    block: &[String],
    options: &ExtractorOptions,
) -> Option<Race> {
    let header_line = block.first()?;
    let caps = CHS_RACE_HEADER_RE.captures(header_line)?;

    let mut race = Race {
        hora: caps["hora"].to_string(),
        ..Race::default()
    };

    if let Some(opc) = CHS_OPC_RE.captures(header_line) {
        let numbers: Vec<u32> = opc[1]
            .split('-')
            .filter_map(|piece| piece.trim().parse().ok())
            .take(OPTION_NUMBER_COUNT)
            .collect();
        race.opcion = complete_option_list(numbers);
    }

    if let Some(details) = block.get(1).and_then(|l| CHS_RACE_DETAILS_RE.captures(l)) {
        race.distancia_m = details["dist"].to_string();
        race.condicion = details["resto"].trim().to_string();
    }

    if let Some(code) = CHS_CODE_RE.captures_iter(header_line).last() {
        race.codigo = code[1].replace('.', "");
    }

    let upper = header_line.to_uppercase();
    race.tipo = if upper.contains("HANDICAP") {
        crate::app::models::RaceType::Handicap
    } else if upper.contains("CONDICIONAL") {
        crate::app::models::RaceType::Condicional
    } else if upper.contains("CLASICO") {
        crate::app::models::RaceType::Clasico
    } else {
        crate::app::models::RaceType::None
    };

    if let Some(premio) = CHS_PREMIO_RE.captures(header_line) {
        race.premio_nombre = premio[1].trim().to_string();
    }

    // Participant table starts below the details line
    let first_row = (2..block.len())
        .find(|&i| is_participant_start(block, i, options))
        .unwrap_or(block.len());

    race.participantes = gather_participant_chunks(dialect, &block[first_row..], options)
        .iter()
        .filter_map(|chunk| (dialect.parse_participant_chunk)(chunk))
        .collect();

    Some(race)
}
