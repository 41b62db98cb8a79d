//! Participant segmentation and chunk parsing
//!
//! A participant "chunk" is the contiguous run of lines describing one
//! competitor: a dialect-specific start line plus any continuation lines the
//! text extractor wrapped below it. Chunk parsing is a fallback chain: the
//! columnar heuristic handles rows that survived extraction in one line,
//! the multi-line heuristic reassembles rows that were split apart. A chunk
//! matching neither rule is skipped; it never aborts the race.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::Participant;
use crate::app::services::dialects::Dialect;
use crate::config::ExtractorOptions;
use crate::constants::PARTICIPANT_NUMERIC_SCAN_LIMIT;

static NUMBER_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})\s+(.+)").unwrap());

static COLUMN_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

static LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-zÁÉÍÓÚÑáéíóúñ]").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Performance-record prefix sometimes glued before the stud name,
/// e.g. "3-1-4-2-Stud Los Tilos"
static PERFORMANCE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\*-]+-(.+)").unwrap());

/// A line that is only digits, dashes, dots and spaces carries no stud name
static MOSTLY_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\.-]+$").unwrap());

/// Trailing 2-3 digit weight at the end of a name/sire line
static TRAILING_WEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{2,3})\s*$").unwrap());

/// Group a block's participant section into per-competitor chunks
///
/// Each start line (per the dialect's predicate) flushes the current chunk
/// and opens a new one; non-start lines are appended to the open chunk.
/// Lines before the first start line belong to no competitor and are
/// dropped.
pub fn gather_participant_chunks(
    dialect: &Dialect,
    lines: &[String],
    options: &ExtractorOptions,
) -> Vec<Vec<String>> {
    let mut chunks: Vec<Vec<String>> = Vec::new();
    let mut current: Option<Vec<String>> = None;

    for idx in 0..lines.len() {
        if (dialect.is_participant_start)(lines, idx, options) {
            if let Some(chunk) = current.take() {
                chunks.push(chunk);
            }
            current = Some(vec![lines[idx].clone()]);
        } else if let Some(chunk) = current.as_mut() {
            chunk.push(lines[idx].clone());
        }
    }

    if let Some(chunk) = current {
        chunks.push(chunk);
    }

    chunks
}

/// Columnar heuristic: the whole row survived extraction as one line
///
/// Splits the first line on runs of two or more spaces. With at least four
/// columns and a leading numeric column, number, name and weight come from
/// fixed positions; jockey and trainer are found by scanning for a hyphened
/// token, and the stud is the last column.
pub fn parse_chunk_columnar(chunk: &[String]) -> Option<Participant> {
    let line0 = chunk.first()?.trim();
    let columns: Vec<&str> = COLUMN_SPLIT_RE.split(line0).collect();

    if columns.len() < 4 || !is_all_digits(columns[0]) {
        return None;
    }

    let numero = columns[0].to_string();
    let nombre = strip_sire_suffix(columns[1]).to_string();
    let peso = columns[2].to_string();

    let mut jinete = String::new();
    let mut preparador = String::new();
    for column in &columns[3..] {
        if let Some((j, p)) = split_jockey_trainer_token(column) {
            jinete = j;
            preparador = p;
            break;
        }
    }

    let stud_full = columns[columns.len() - 1];
    let stud = stud_full
        .split_once(" - ")
        .map(|(head, _)| head)
        .unwrap_or(stud_full)
        .trim()
        .to_string();

    Some(Participant {
        numero,
        nombre,
        jinete,
        peso,
        preparador,
        stud,
    })
}

/// Multi-line heuristic: the row was split across several lines
///
/// The first line (or the next one when the first is a bare number) carries
/// number and name; a short numeric run below supplies the weight; the line
/// after the run splits on a hyphen into jockey and trainer; the following
/// line, unless mostly numeric, is the stud.
pub fn parse_chunk_multiline(chunk: &[String]) -> Option<Participant> {
    let line0 = chunk.first()?.trim();

    let (numero, nombre_line, mut idx) = if is_all_digits(line0) {
        if chunk.len() < 2 {
            return None;
        }
        (line0.to_string(), chunk[1].trim().to_string(), 2)
    } else {
        let caps = NUMBER_NAME_RE.captures(line0)?;
        (caps[1].to_string(), caps[2].trim().to_string(), 1)
    };

    let nombre = strip_sire_suffix(&nombre_line).to_string();

    let (numbers, next_idx) = extract_numeric_sequence(chunk, idx);
    idx = next_idx;

    let peso = match numbers.first() {
        Some(n) => n.to_string(),
        // Some layouts print the weight at the tail of the sire suffix
        None => nombre_line
            .split_once(" - ")
            .and_then(|(_, suffix)| TRAILING_WEIGHT_RE.captures(suffix))
            .map(|caps| caps[1].to_string())
            .unwrap_or_default(),
    };

    let mut jinete = String::new();
    let mut preparador = String::new();
    let mut stud = String::new();

    if idx < chunk.len() {
        let jp_line = chunk[idx].trim();
        match jp_line.split_once('-') {
            Some((j, p)) => {
                jinete = j.trim().to_string();
                preparador = p.trim().trim_end_matches('.').to_string();
            }
            None => jinete = jp_line.to_string(),
        }

        if idx + 1 < chunk.len() {
            let stud_candidate = chunk[idx + 1].trim();
            if let Some(caps) = PERFORMANCE_PREFIX_RE.captures(stud_candidate) {
                stud = caps[1].trim().to_string();
            } else if !MOSTLY_NUMERIC_RE.is_match(stud_candidate) {
                stud = stud_candidate.to_string();
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

/// Collect a short run of numeric tokens starting at `start`
///
/// Scanning stops once three numbers are collected or a line containing
/// letters is reached; that line is not consumed. Returns the numbers and
/// the index of the first unconsumed line.
pub fn extract_numeric_sequence(lines: &[String], start: usize) -> (Vec<u64>, usize) {
    let mut numbers = Vec::new();
    let mut idx = start;

    while idx < lines.len() {
        let line = lines[idx].replace('\t', " ");
        let line = line.trim();
        if line.is_empty() {
            idx += 1;
            continue;
        }
        if LETTER_RE.is_match(line) {
            break;
        }

        let found: Vec<u64> = NUMBER_RE
            .find_iter(line)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        numbers.extend(found);
        idx += 1;

        if numbers.len() >= PARTICIPANT_NUMERIC_SCAN_LIMIT {
            break;
        }
    }

    (numbers, idx)
}

/// Truncate a horse name at the first sire separator
pub fn strip_sire_suffix(name: &str) -> &str {
    name.split_once(" - ").map(|(head, _)| head).unwrap_or(name).trim()
}

/// Split a "J. Perez-L. Gomez." style token into jockey and trainer
///
/// The token must carry a hyphen, not start with a digit, and be long enough
/// to hold two names; otherwise it is not a jockey/trainer cell.
fn split_jockey_trainer_token(token: &str) -> Option<(String, String)> {
    if !token.contains('-') || token.len() <= 5 {
        return None;
    }
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let (jinete, preparador) = token.split_once('-')?;
    Some((
        jinete.trim().to_string(),
        preparador.trim().trim_end_matches('.').to_string(),
    ))
}

/// Whether a trimmed line is nothing but digits
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
