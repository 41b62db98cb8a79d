//! Application constants for the volante extractor
//!
//! This module contains the fixed vocabulary used throughout the extractor:
//! locale month names, bet-type normalization, venue banners and the default
//! scan limits shared by the dialects.

// =============================================================================
// Locale Vocabulary
// =============================================================================

/// Spanish weekday alternation used in meeting-date patterns
///
/// Includes the unaccented spellings produced by some text extractors.
pub const WEEKDAYS_PATTERN: &str =
    "(Lunes|Martes|Miércoles|Miercoles|Jueves|Viernes|Sábado|Sabado|Domingo)";

/// Spanish month names mapped to month numbers
///
/// Lookup is case-insensitive. "setiembre" is an accepted alternate spelling
/// of September seen in older programs.
pub const MONTHS: &[(&str, u32)] = &[
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Look up a month number by its Spanish name (case-insensitive)
pub fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == lowered)
        .map(|(_, number)| *number)
}

// =============================================================================
// Bet-Type Normalization
// =============================================================================

/// Canonical names for the bet-type abbreviations printed in programs
///
/// Keys are uppercased tokens with the masculine ordinal indicator folded to
/// the degree sign, matching the cleanup applied before lookup. Tokens not in
/// this table pass through uppercased and trimmed.
pub const BET_TYPE_NORMALIZATION: &[(&str, &str)] = &[
    ("GDOR", "Ganador"),
    ("GANADOR", "Ganador"),
    ("A 2°", "A Segundo"),
    ("A SEGUNDO", "A Segundo"),
    ("A 3°", "A Tercero"),
    ("A TERCERO", "A Tercero"),
    ("QLA", "Quinela"),
    ("QUINELA", "Quinela"),
    ("QLA-PLA", "Quinela-Place"),
    ("QUINELA-PLACE", "Quinela-Place"),
    ("EXAC", "Exacta"),
    ("EXACTA", "Exacta"),
    ("TRIF", "Trifecta"),
    ("TRIFECTA", "Trifecta"),
    ("SUP", "Superfecta"),
    ("SUPERFECTA", "Superfecta"),
];

// =============================================================================
// Venue Identification
// =============================================================================

/// Venue codes as they appear in the serialized meeting
pub mod venue_codes {
    /// Hipódromo Chile
    pub const HCH: &str = "HCH";

    /// Club Hípico de Santiago
    pub const CHS: &str = "CHS";

    /// Valparaíso Sporting Club
    pub const VSC: &str = "VSC";
}

// =============================================================================
// Default Scan Limits
// =============================================================================

/// Lines scanned backward from the meeting marker for header fields
pub const DEFAULT_HEADER_LOOKBACK: usize = 100;

/// Lines scanned forward past the meeting end for header fields
pub const DEFAULT_HEADER_LOOKAHEAD: usize = 50;

/// Lines scanned from the top of a race block for its header line
pub const DEFAULT_HEADER_SCAN_DEPTH: usize = 5;

/// Largest value accepted as a bare participant number
pub const DEFAULT_MAX_PARTICIPANT_NUMBER: u32 = 30;

/// Option-number lists are either complete (this many picks) or discarded
pub const OPTION_NUMBER_COUNT: usize = 4;

/// Numeric-sequence scan inside a participant chunk stops at this many values
pub const PARTICIPANT_NUMERIC_SCAN_LIMIT: usize = 3;
