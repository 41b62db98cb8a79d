//! Data models for extracted race-meeting data
//!
//! This module contains the core data structures for representing one day's
//! race card: the meeting header, its races and their participants. Field
//! names follow the wire shape consumed by downstream persistence, so the
//! structs serialize to the expected JSON without renames.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::venue_codes;
use crate::{Error, Result};

// =============================================================================
// Venue
// =============================================================================

/// Issuing venue of a race program
///
/// The venue is a property of which dialect ran, never a parsed field: each
/// dialect stamps its own code on the meeting it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    /// Hipódromo Chile
    #[serde(rename = "HCH")]
    Hch,

    /// Club Hípico de Santiago
    #[serde(rename = "CHS")]
    Chs,

    /// Valparaíso Sporting Club
    #[serde(rename = "VSC")]
    Vsc,
}

impl Venue {
    /// Wire code for this venue
    pub fn code(&self) -> &'static str {
        match self {
            Venue::Hch => venue_codes::HCH,
            Venue::Chs => venue_codes::CHS,
            Venue::Vsc => venue_codes::VSC,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Venue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            venue_codes::HCH => Ok(Venue::Hch),
            venue_codes::CHS => Ok(Venue::Chs),
            venue_codes::VSC => Ok(Venue::Vsc),
            other => Err(Error::unknown_venue(other)),
        }
    }
}

// =============================================================================
// Race Type
// =============================================================================

/// Race classification as printed at the start of the race header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RaceType {
    /// No classification printed
    #[default]
    #[serde(rename = "")]
    None,

    #[serde(rename = "HANDICAP")]
    Handicap,

    #[serde(rename = "CONDICIONAL")]
    Condicional,

    #[serde(rename = "CLASICO")]
    Clasico,

    #[serde(rename = "CLASICO CONDICIONAL")]
    ClasicoCondicional,
}

impl RaceType {
    /// Wire string for this race type
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceType::None => "",
            RaceType::Handicap => "HANDICAP",
            RaceType::Condicional => "CONDICIONAL",
            RaceType::Clasico => "CLASICO",
            RaceType::ClasicoCondicional => "CLASICO CONDICIONAL",
        }
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One competitor row within a race
///
/// All fields are plain strings taken from the document; anything the parser
/// could not locate is left empty. `nombre` never carries the trailing sire
/// suffix printed after the horse name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Saddle number
    pub numero: String,

    /// Horse name, sire suffix removed
    pub nombre: String,

    /// Jockey name
    pub jinete: String,

    /// Carried weight in kilograms
    pub peso: String,

    /// Trainer name
    pub preparador: String,

    /// Owning stud
    pub stud: String,
}

// =============================================================================
// Race
// =============================================================================

/// One race on the card
///
/// `nro_carrera` is assigned after the full card is parsed and time-sorted;
/// it never comes from the document. Every other field defaults to an empty
/// value when the source text does not provide it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// 1-based race number, reassigned post-sort
    pub nro_carrera: String,

    /// Start time, "HH:MM"
    pub hora: String,

    /// Distance in meters
    pub distancia_m: String,

    /// Program code printed in parentheses on the header line
    pub codigo: String,

    /// Race classification
    pub tipo: RaceType,

    /// Free-text entry condition left over after header reduction
    pub condicion: String,

    /// Series ordinal, retained for HANDICAP races only
    pub serie: String,

    /// Handicap index range
    pub indice: String,

    /// Weight category in kilograms
    pub peso_categoria_kg: String,

    /// Normalized bet types available for this race
    pub apuestas: Vec<String>,

    /// Prize name
    pub premio_nombre: String,

    /// Prize amounts by placement key ("1o".."4o")
    pub premios: BTreeMap<String, String>,

    /// Highlighted pick numbers; always empty or exactly four entries
    pub opcion: Vec<u32>,

    /// Competitor rows in document order
    pub participantes: Vec<Participant>,
}

// =============================================================================
// Meeting
// =============================================================================

/// One day's full race card at one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Meeting number from the program header, digits only
    pub nro_reunion: String,

    /// Meeting date as ISO-8601, or empty when no date was recognized
    pub fecha: String,

    /// Issuing venue, stamped by the dialect that ran
    pub recinto: Venue,

    /// Races sorted by start time ascending, numbered 1..N
    pub carreras: Vec<Race>,
}

impl Meeting {
    /// Create an empty meeting for a venue
    ///
    /// Used when a document yields no recognizable header or races; the
    /// extractor degrades to this rather than failing.
    pub fn empty(recinto: Venue) -> Self {
        Self {
            nro_reunion: String::new(),
            fecha: String::new(),
            recinto,
            carreras: Vec::new(),
        }
    }

    /// Serialize to the JSON wire shape consumed by downstream persistence
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("Failed to serialize meeting", e))
    }
}
