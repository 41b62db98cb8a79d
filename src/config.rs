//! Extractor configuration.
//!
//! Provides the tunable scan limits used by the extraction pipeline. The
//! defaults reproduce the behavior observed across real programs; callers
//! only need to touch these when a venue changes its layout.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HEADER_LOOKAHEAD, DEFAULT_HEADER_LOOKBACK, DEFAULT_HEADER_SCAN_DEPTH,
    DEFAULT_MAX_PARTICIPANT_NUMBER,
};

/// Scan limits for one extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorOptions {
    /// Lines included before the meeting marker when parsing the header.
    /// Generous by default to tolerate arbitrary preamble.
    pub header_lookback: usize,

    /// Lines included after the meeting end when parsing the header
    pub header_lookahead: usize,

    /// How deep into a race block to look for its header line
    pub header_scan_depth: usize,

    /// Largest value accepted as a bare participant number; larger bare
    /// numerics are treated as stray data, not row starts
    pub max_participant_number: u32,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            header_lookback: DEFAULT_HEADER_LOOKBACK,
            header_lookahead: DEFAULT_HEADER_LOOKAHEAD,
            header_scan_depth: DEFAULT_HEADER_SCAN_DEPTH,
            max_participant_number: DEFAULT_MAX_PARTICIPANT_NUMBER,
        }
    }
}
