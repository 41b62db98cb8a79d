//! Race block segmentation
//!
//! Splits the full line sequence into per-race blocks. Every line matching
//! the dialect's race-header pattern opens a block; blocks are the half-open
//! ranges between consecutive boundaries. Lines before the first boundary
//! form the leading block, which is not a race: it is kept because some
//! programs print the first race's participant table ahead of its own header.

use crate::app::services::dialects::Dialect;
use crate::app::services::meeting_extractor::race_block::OPCION_LABEL_RE;

/// Half-open line range of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    /// Borrow the lines belonging to this block
    pub fn lines<'a>(&self, lines: &'a [String]) -> &'a [String] {
        &lines[self.start..self.end]
    }
}

/// The segmented document: an optional leading block plus the race blocks
#[derive(Debug, Clone, Default)]
pub struct SegmentedDocument {
    /// Lines preceding the first race-header match, when any exist
    pub leading: Option<Block>,

    /// One block per race-header match, in document order
    pub races: Vec<Block>,
}

/// Split the line sequence into race blocks
///
/// Some dialects split their race header across lines, leaving the "Opción"
/// label just above the detected header; `dialect.boundary_lookback` lines are
/// walked backward to absorb such a label line into the same block. Adjusted
/// boundaries never cross the previous block's start, so boundaries stay
/// strictly increasing.
pub fn split_race_blocks(lines: &[String], dialect: &Dialect) -> SegmentedDocument {
    let mut boundaries: Vec<usize> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !dialect.race_header_re.is_match(line) {
            continue;
        }

        let mut start = idx;
        for offset in 1..=dialect.boundary_lookback {
            let Some(candidate) = idx.checked_sub(offset) else {
                break;
            };
            if OPCION_LABEL_RE.is_match(&lines[candidate]) {
                start = candidate;
                break;
            }
        }

        // Lookback must not cross into the previous block
        if let Some(&previous) = boundaries.last() {
            if start <= previous {
                start = idx;
            }
        }
        boundaries.push(start);
    }

    let mut segmented = SegmentedDocument::default();

    if let Some(&first) = boundaries.first() {
        if first > 0 {
            segmented.leading = Some(Block {
                start: 0,
                end: first,
            });
        }
    }

    for (idx, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(idx + 1).copied().unwrap_or(lines.len());
        segmented.races.push(Block { start, end });
    }

    segmented
}
