//! Volante Extractor Library
//!
//! A Rust library for extracting structured race-meeting data from the text
//! of Chilean race-program documents ("volantes").
//!
//! This library provides tools for:
//! - Locating the meeting header (date and meeting number) in extracted text
//! - Segmenting the line sequence into per-race blocks
//! - Parsing race metadata (time, distance, code, type, series, bets, prizes)
//! - Parsing participant tables with layout heuristics for degraded text
//! - Venue-specific dialects for Hipódromo Chile (HCH), Club Hípico de
//!   Santiago (CHS) and Valparaíso Sporting Club (VSC)
//!
//! The extractor is total over its input: malformed blocks and chunks are
//! skipped, missing fields default to empty values, and a document with no
//! recognizable content still yields an empty [`Meeting`](app::models::Meeting).

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dialects;
        pub mod meeting_extractor;
    }
}

// Re-export commonly used types
pub use app::models::{Meeting, Participant, Race, RaceType, Venue};
pub use app::services::dialects::{Dialect, detect_venue};
pub use app::services::meeting_extractor::{MeetingExtractor, extract_meeting};
pub use config::ExtractorOptions;

/// Result type alias for the volante extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for extractor edge operations
///
/// Extraction itself never fails (see crate docs); these errors cover the
/// operations around it, such as choosing a dialect from a venue code or
/// serializing a meeting to its wire shape.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Venue code not recognized
    #[error("Unknown venue code: '{code}' (expected HCH, CHS or VSC)")]
    UnknownVenue { code: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an unknown venue error
    pub fn unknown_venue(code: impl Into<String>) -> Self {
        Self::UnknownVenue { code: code.into() }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
