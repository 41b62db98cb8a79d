//! Extraction statistics and result structures

use crate::app::models::Meeting;

/// Counters accumulated over one extraction run
///
/// Skipped blocks and chunks are expected conditions (see crate docs); the
/// stats exist so callers can log or inspect how much of a document was
/// actually recognized.
#[derive(Debug, Clone, Default)]
pub struct ExtractionStats {
    /// Lines in the input sequence
    pub total_lines: usize,

    /// Meeting-date markers found (1 when synthesized)
    pub markers_found: usize,

    /// Race blocks produced by the segmenter
    pub race_blocks_found: usize,

    /// Blocks successfully parsed into races
    pub races_parsed: usize,

    /// Blocks whose header line could not be matched
    pub blocks_skipped: usize,

    /// Participant rows parsed across all races
    pub participants_parsed: usize,

    /// Human-readable notes about recovered conditions
    pub warnings: Vec<String>,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recovered condition
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Complete result of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The extracted meeting, possibly sparse
    pub meeting: Meeting,

    /// Counters for this run
    pub stats: ExtractionStats,
}
