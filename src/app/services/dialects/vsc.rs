//! Valparaíso Sporting Club (VSC) dialect
//!
//! VSC shares the HCH header and date formats but its text extraction often
//! detaches the "Opción" label from the race header, so block boundaries
//! walk up to three lines backward to reabsorb it. Participant rows carry a
//! "(ARG)"-style origin mark and a sire suffix, and the jockey/trainer pair
//! sits inside the columns rather than on its own line, so the chunk parser
//! is entirely its own.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use super::hch::{HCH_DATE_RE, HCH_RACE_HEADER_RE, HCH_REUNION_RE};
use crate::app::models::{Participant, Venue};
use crate::app::services::meeting_extractor::header::date_with_de_to_iso;
use crate::app::services::meeting_extractor::race_block;
use crate::config::ExtractorOptions;

/// "22 LE PEINTRE (ARG) - Interaction" row start
static VSC_PARTICIPANT_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d{1,2})\s+(.+?)\s+-\s+(.+)").unwrap());

static COLUMN_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// "J.A. Perez - L.E. Gomez" jockey/trainer pair inside the row text
static VSC_JOCKEY_TRAINER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z\.]+\s+[A-Z][a-z]+.*)\s+-\s+([A-Z\.]+\s+[A-Z][a-z]+.*)").unwrap()
});

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+(.+)").unwrap());

static WEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{2,3})\b").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

impl Dialect {
    /// Valparaíso Sporting Club
    pub fn vsc() -> Self {
        Self {
            venue: Venue::Vsc,
            date_re: &HCH_DATE_RE,
            reunion_re: &HCH_REUNION_RE,
            race_header_re: &HCH_RACE_HEADER_RE,
            boundary_lookback: 3,
            date_to_iso: date_with_de_to_iso,
            is_participant_start,
            parse_participant_chunk,
            parse_race_block: race_block::parse_race_block,
        }
    }
}

fn is_participant_start(lines: &[String], idx: usize, _options: &ExtractorOptions) -> bool {
    lines
        .get(idx)
        .is_some_and(|line| VSC_PARTICIPANT_START_RE.is_match(line))
}

/// VSC chunk parser: columnar split first, multi-line regex fallback second
fn parse_participant_chunk(chunk: &[String]) -> Option<Participant> {
    let line0 = chunk.first()?.trim();

    let columns: Vec<&str> = COLUMN_SPLIT_RE.split(line0).collect();
    if columns.len() >= 4 {
        return parse_columnar(&columns);
    }

    parse_multiline(chunk, line0)
}

/// Single-line row with the full column set
fn parse_columnar(columns: &[&str]) -> Option<Participant> {
    let numero = columns[0].trim().to_string();

    // Name column carries the sire after a hyphen
    let name_sire = columns[1].trim();
    let nombre = match name_sire.split_once(" - ") {
        Some((head, _)) => head,
        None => name_sire.split_once('-').map(|(head, _)| head).unwrap_or(name_sire),
    }
    .trim()
    .to_string();

    let remaining = columns[2..].join("   ");

    let mut jinete = String::new();
    let mut preparador = String::new();
    if let Some(caps) = VSC_JOCKEY_TRAINER_RE.captures(&remaining) {
        jinete = caps[1].trim().to_string();
        let preparador_raw = caps[2].trim();
        preparador = COLUMN_SPLIT_RE
            .split(preparador_raw)
            .next()
            .unwrap_or(preparador_raw)
            .trim()
            .to_string();

        // The index column can run into the jockey name
        let stripped = LEADING_NUMBER_RE
            .captures(&jinete)
            .map(|lead| lead[2].trim().to_string());
        if let Some(name) = stripped {
            jinete = name;
        }
    }

    let peso = WEIGHT_RE
        .captures(&remaining)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let mut stud = String::new();
    for column in columns.iter().rev() {
        if !column.contains(" - ") {
            continue;
        }
        if column.chars().take(5).any(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Some((head, _)) = column.split_once(" - ") {
            let candidate = head.trim();
            if candidate != jinete && candidate != preparador {
                stud = candidate.to_string();
                break;
            }
        }
    }

    Some(Participant {
        numero,
        nombre,
        jinete,
        peso,
        preparador,
        stud,
    })
}

/// Multi-line fallback: number and name on the start line, weight and the
/// jockey/trainer pair on the continuation lines
fn parse_multiline(chunk: &[String], line0: &str) -> Option<Participant> {
    let caps = VSC_PARTICIPANT_START_RE.captures(line0)?;
    let numero = caps[1].to_string();
    let nombre = caps[2].trim().to_string();

    let peso = chunk
        .get(1)
        .and_then(|line| NUMBER_RE.find(line))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

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
        numero,
        nombre,
        jinete,
        peso,
        preparador,
        stud: String::new(),
    })
}
