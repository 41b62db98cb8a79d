//! Race block parsing and metadata extraction
//!
//! Parses one block's header line into time, distance and code, reduces the
//! remaining header text left-to-right into type, series, index and
//! condition, then sweeps the block's metadata lines for weight category,
//! bet types, prize name, prize amounts and option numbers. Every field
//! fails closed to an empty value; only a block with no recognizable header
//! line at all yields no race.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{normalize_int, normalize_int_or_empty};
use super::participant::gather_participant_chunks;
use crate::app::models::{Race, RaceType};
use crate::app::services::dialects::Dialect;
use crate::config::ExtractorOptions;
use crate::constants::{BET_TYPE_NORMALIZATION, OPTION_NUMBER_COUNT};

/// "Opción" label, tolerating the unaccented and miscapitalized spellings
/// produced by text extraction
pub static OPCION_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)O[pc]ci[óo]n").unwrap());

static PESO_CATEGORIA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Peso:\s*(\d{2,3})\s*Kilos").unwrap());

static PESO_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bPeso:").unwrap());

static APUESTAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)APUESTAS\s+DISP(?:ONIBLES)?\s*[:\-]\s*(.+)").unwrap());

static PREMIO_NOMBRE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)PREMIO\s*[:\-]\s*(.+)").unwrap());

static PREMIOS_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bPREMIOS\b").unwrap());

static PREMIO_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bPREMIO\b").unwrap());

static PREMIOS_AMOUNTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)PREMIOS\s*[:\-].*?\$([\d\.,]+).*?\$([\d\.,]+).*?\$([\d\.,]+).*?\$([\d\.,]+)",
    )
    .unwrap()
});

static TIPO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(HANDICAP|CLASICO CONDICIONAL|CLASICO|CONDICIONAL)").unwrap());

static SERIE_ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)(?:ta|da|ra|to|do|ro|ma|a)\.?\s*Serie").unwrap());

static SERIE_PLAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(Serie\s+Indice.*|Serie\s+[A-Z0-9]+.*)").unwrap());

static SERIE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(SERIE[- ]?[A-Z0-9]+)\b").unwrap());

static INDICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Indice:\s*(.+?)\s*$").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Header fields obtained by reducing the text after time/distance/code
#[derive(Debug, Clone, Default, PartialEq)]
struct HeaderResto {
    tipo: RaceType,
    serie: String,
    indice: String,
    condicion: String,
}

/// Parse one race block with the generic header layout
///
/// The header line is located by scanning the first `header_scan_depth`
/// lines rather than assuming position 0: a boundary-adjusted block can
/// carry its "Opción" label line first. Returns `None` when no line in the
/// scan window matches the dialect's header pattern.
pub fn parse_race_block(
    dialect: &Dialect,
    block: &[String],
    options: &ExtractorOptions,
) -> Option<Race> {
    let scan_depth = options.header_scan_depth.min(block.len());
    let header_idx = (0..scan_depth).find(|&i| dialect.race_header_re.is_match(&block[i]))?;

    let header_line = &block[header_idx];
    let caps = dialect.race_header_re.captures(header_line)?;

    let hora = caps.name("hora").map(|m| m.as_str()).unwrap_or_default();
    let distancia_m = caps
        .name("dist")
        .map(|m| normalize_int_or_empty(m.as_str()))
        .unwrap_or_default();
    let codigo = caps
        .name("codigo")
        .map(|m| m.as_str().replace('.', ""))
        .unwrap_or_default();
    let resto = caps.name("resto").map(|m| m.as_str()).unwrap_or_default();

    let header_resto = reduce_resto(resto);

    // Metadata lines run from the header to the first participant row
    let mut idx = header_idx + 1;
    while idx < block.len() {
        if (dialect.is_participant_start)(block, idx, options) {
            break;
        }
        idx += 1;
    }

    let pre_header = &block[..header_idx];
    let meta_lines: Vec<&str> = pre_header
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(header_line.as_str()))
        .chain(block[header_idx + 1..idx].iter().map(String::as_str))
        .collect();
    let meta_text = meta_lines.join(" ");

    let peso_categoria_kg = PESO_CATEGORIA_RE
        .captures(&meta_text)
        .map(|c| normalize_int_or_empty(&c[1]))
        .unwrap_or_default();

    let participantes = gather_participant_chunks(dialect, &block[idx..], options)
        .iter()
        .filter_map(|chunk| (dialect.parse_participant_chunk)(chunk))
        .collect();

    Some(Race {
        nro_carrera: String::new(),
        hora: hora.to_string(),
        distancia_m,
        codigo,
        tipo: header_resto.tipo,
        condicion: header_resto.condicion,
        serie: header_resto.serie,
        indice: header_resto.indice,
        peso_categoria_kg,
        apuestas: extract_bet_types(&meta_text),
        premio_nombre: extract_prize_name(&meta_text),
        premios: extract_prize_amounts(&meta_text),
        opcion: extract_option_numbers(meta_lines.iter().copied()),
        participantes,
    })
}

/// Reduce the post-code header text by sequential removal
///
/// Order matters: type token first, then the series ordinal (or one of its
/// two fallbacks), then the HANDICAP-only "Indice:" clause. Whatever text
/// survives is the free-text condition.
fn reduce_resto(resto: &str) -> HeaderResto {
    let mut out = HeaderResto::default();

    // Anything from "Peso:" onward belongs to the metadata sweep, not here
    let mut resto = match PESO_SPLIT_RE.find(resto) {
        Some(m) => resto[..m.start()].trim().to_string(),
        None => resto.trim().to_string(),
    };

    if let Some(m) = TIPO_RE.find(&resto) {
        out.tipo = match m.as_str().to_uppercase().as_str() {
            "HANDICAP" => RaceType::Handicap,
            "CONDICIONAL" => RaceType::Condicional,
            "CLASICO" => RaceType::Clasico,
            _ => RaceType::ClasicoCondicional,
        };
        resto = resto[m.end()..].trim().to_string();
    }

    if let Some(caps) = SERIE_ORDINAL_RE.captures(&resto) {
        // The ordinal only names a series for handicaps, but the matched
        // text is removed from the condition either way
        if out.tipo == RaceType::Handicap {
            out.serie = caps[1].to_string();
        }
        let full = caps.get(0).unwrap();
        let (start, end) = (full.start(), full.end());
        resto = format!("{}{}", &resto[..start], &resto[end..])
            .trim()
            .to_string();
    } else if let Some(m) = SERIE_PLAIN_RE.find(&resto) {
        resto = resto[..m.start()].trim().to_string();
    } else if let Some(caps) = SERIE_CODE_RE.captures(&resto) {
        let full = caps.get(1).unwrap();
        resto = format!("{}{}", &resto[..full.start()], &resto[full.end()..])
            .trim_matches(|c| c == ' ' || c == '.')
            .to_string();
    }

    if out.tipo == RaceType::Handicap {
        if let Some(caps) = INDICE_RE.captures(&resto) {
            out.indice = caps[1].trim().to_string();
            let full = caps.get(0).unwrap();
            let (start, end) = (full.start(), full.end());
            resto = format!("{}{}", &resto[..start], &resto[end..])
                .trim()
                .to_string();
        }
    }

    out.condicion = resto;
    out
}

/// Extract and normalize the allowed bet types from the metadata text
///
/// The clause is cut before any following "PREMIO" keyword, split on ";" or
/// ",", and each token normalized. A missing clause yields an empty list,
/// never an error.
pub fn extract_bet_types(meta_text: &str) -> Vec<String> {
    let Some(caps) = APUESTAS_RE.captures(meta_text) else {
        return Vec::new();
    };

    let clause = &caps[1];
    let clause = match PREMIO_SPLIT_RE.find(clause) {
        Some(m) => &clause[..m.start()],
        None => clause,
    };

    clause
        .split([';', ','])
        .filter_map(normalize_bet_type)
        .collect()
}

/// Normalize one bet-type token via the fixed abbreviation table
///
/// Unknown tokens pass through uppercased and trimmed; empty tokens vanish.
pub fn normalize_bet_type(token: &str) -> Option<String> {
    let cleaned = token.trim().replace('º', "°").to_uppercase();
    if cleaned.is_empty() {
        return None;
    }
    BET_TYPE_NORMALIZATION
        .iter()
        .find(|(abbrev, _)| *abbrev == cleaned)
        .map(|(_, canonical)| (*canonical).to_string())
        .or(Some(cleaned))
}

/// Extract the prize name, truncated before any following "PREMIOS" keyword
pub fn extract_prize_name(meta_text: &str) -> String {
    let Some(caps) = PREMIO_NOMBRE_RE.captures(meta_text) else {
        return String::new();
    };

    let raw = caps[1].trim().to_string();
    let name = match PREMIOS_SPLIT_RE.find(&raw) {
        Some(m) => &raw[..m.start()],
        None => &raw,
    };
    name.trim_matches(|c: char| c == ' ' || c == '-' || c == ':')
        .to_string()
}

/// Extract the four placement prize amounts after the "PREMIOS:" label
///
/// Amounts map to placement keys "1o".."4o"; fewer than four recognizable
/// amounts yields an empty map.
pub fn extract_prize_amounts(meta_text: &str) -> BTreeMap<String, String> {
    let mut premios = BTreeMap::new();

    if let Some(caps) = PREMIOS_AMOUNTS_RE.captures(meta_text) {
        for (idx, key) in ["1o", "2o", "3o", "4o"].iter().enumerate() {
            if let Some(amount) = normalize_int(&caps[idx + 1]) {
                premios.insert((*key).to_string(), amount);
            }
        }
    }

    premios
}

/// Extract the option numbers following an "Opción" label
///
/// The first line carrying the label supplies the numbers. An option list is
/// either complete (four picks) or absent; partial lists are discarded.
pub fn extract_option_numbers<'a>(meta_lines: impl IntoIterator<Item = &'a str>) -> Vec<u32> {
    for line in meta_lines {
        let Some(m) = OPCION_LABEL_RE.find(line) else {
            continue;
        };
        let after = &line[m.end()..];
        let numbers: Vec<u32> = NUMBER_RE
            .find_iter(after)
            .take(OPTION_NUMBER_COUNT)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        return complete_option_list(numbers);
    }
    Vec::new()
}

/// Enforce the all-or-nothing option list invariant
pub fn complete_option_list(numbers: Vec<u32>) -> Vec<u32> {
    if numbers.len() == OPTION_NUMBER_COUNT {
        numbers
    } else {
        Vec::new()
    }
}
